//! Command implementations
//!
//! Each command validates its input, calls into the core/analysis layers, and
//! returns a plain result struct. Rendering lives in [`crate::output`].

pub mod analyze;
pub mod crack;
pub mod transform;

pub use analyze::{AnalysisReport, analyze_text};
pub use crack::crack_text;
pub use transform::{TransformResult, run_transform};

use crate::core::ShiftError;
use std::fmt;

/// User-facing validation errors shared by the commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The input text was empty or whitespace-only
    EmptyInput,
    /// The shift failed validation
    InvalidShift(ShiftError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter some text to process"),
            Self::InvalidShift(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyInput => None,
            Self::InvalidShift(err) => Some(err),
        }
    }
}

impl From<ShiftError> for CommandError {
    fn from(err: ShiftError) -> Self {
        Self::InvalidShift(err)
    }
}

/// Reject empty or whitespace-only input before invoking the core
pub(crate) fn require_text(text: &str) -> Result<&str, CommandError> {
    if text.trim().is_empty() {
        Err(CommandError::EmptyInput)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_rejects_blank_input() {
        assert_eq!(require_text(""), Err(CommandError::EmptyInput));
        assert_eq!(require_text("  \t\n"), Err(CommandError::EmptyInput));
    }

    #[test]
    fn require_text_passes_input_through_untrimmed() {
        // Surrounding whitespace is preserved so cipher output keeps its shape
        assert_eq!(require_text("  hi  "), Ok("  hi  "));
    }

    #[test]
    fn shift_errors_convert() {
        let err: CommandError = ShiftError::OutOfRange(40).into();
        assert!(err.to_string().contains("between 1 and 25"));
    }
}
