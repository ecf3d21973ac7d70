//! Word lists for readability scoring
//!
//! Provides the embedded common-word list compiled into the binary for zero-cost access.

mod common;

pub use common::{COMMON_WORD_SET, COMMON_WORDS};
