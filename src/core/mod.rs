//! Core cipher engine
//!
//! This module contains the fundamental cipher types with zero external dependencies.
//! All functions here are pure, testable, and have clear mathematical properties.

mod cipher;
mod shift;

pub use cipher::{Direction, decrypt, encrypt, transform};
pub use shift::{MAX_SHIFT, MIN_SHIFT, Shift, ShiftError};
