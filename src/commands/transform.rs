//! Encrypt/decrypt command
//!
//! Validates the shift and input text at the user boundary, then delegates to
//! the cipher engine.

use super::{CommandError, require_text};
use crate::core::{Direction, Shift, transform};

/// Result of an encrypt or decrypt run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub direction: Direction,
    pub shift: Shift,
    pub output: String,
}

/// Encrypt or decrypt `text` with a raw user-supplied shift
///
/// # Errors
///
/// Returns an error if:
/// - `text` is empty or whitespace-only
/// - `shift` is outside [1, 25]
pub fn run_transform(
    text: &str,
    shift: i32,
    direction: Direction,
) -> Result<TransformResult, CommandError> {
    let text = require_text(text)?;
    let shift = Shift::new(shift)?;

    Ok(TransformResult {
        direction,
        shift,
        output: transform(text, shift.value(), direction),
    })
}
