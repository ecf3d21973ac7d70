//! Text analysis utilities
//!
//! Statistics, letter frequencies, and brute-force decryption ranking built
//! on top of the core cipher engine.

mod frequency;
mod statistics;
mod suggest;

pub use frequency::{FrequencyTable, frequency_analysis};
pub use statistics::{TextStatistics, compute_statistics};
pub use suggest::{DecryptionCandidate, readability_score, suggest_decryption};
