//! Caesar Cipher Toolkit
//!
//! A classical monoalphabetic substitution cipher with frequency analysis and
//! heuristic brute-force cracking. Only ASCII letters are ciphered; the cipher
//! is classical, not secure.
//!
//! # Quick Start
//!
//! ```rust
//! use caesar_toolkit::core::{Direction, Shift, transform};
//! use caesar_toolkit::analysis::suggest_decryption;
//!
//! let shift = Shift::new(3).unwrap();
//! let cipher = transform("Hello, World!", shift.value(), Direction::Encrypt);
//! assert_eq!(cipher, "Khoor, Zruog!");
//!
//! // Rank all 25 possible decryptions by how English-like they look
//! let candidates = suggest_decryption(&cipher);
//! assert_eq!(candidates.len(), 25);
//! ```

// Core cipher engine
pub mod core;

// Text statistics, frequencies, and brute-force ranking
pub mod analysis;

// Embedded common-word list for readability scoring
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
