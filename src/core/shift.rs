//! Validated cipher shift value
//!
//! A `Shift` is an offset in [1, 25]. Shifts of 0 and 26 are identity transforms
//! and are rejected at this boundary rather than clamped; the cipher engine itself
//! still normalizes arbitrary integers defensively (see [`crate::core::cipher`]).

use std::fmt;

/// Smallest meaningful shift.
pub const MIN_SHIFT: i32 = 1;

/// Largest meaningful shift.
pub const MAX_SHIFT: i32 = 25;

/// A Caesar cipher shift, guaranteed to lie in [1, 25]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shift(i32);

/// Error type for invalid shift values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftError {
    NotANumber(String),
    OutOfRange(i32),
}

impl fmt::Display for ShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(input) => {
                write!(f, "Shift must be an integer, got '{input}'")
            }
            Self::OutOfRange(value) => {
                write!(f, "Shift must be between {MIN_SHIFT} and {MAX_SHIFT}, got {value}")
            }
        }
    }
}

impl std::error::Error for ShiftError {}

impl Shift {
    /// Create a new Shift from an integer
    ///
    /// # Errors
    /// Returns `ShiftError::OutOfRange` if the value is not in [1, 25].
    ///
    /// # Examples
    /// ```
    /// use caesar_toolkit::core::Shift;
    ///
    /// let shift = Shift::new(3).unwrap();
    /// assert_eq!(shift.value(), 3);
    ///
    /// assert!(Shift::new(0).is_err());
    /// assert!(Shift::new(26).is_err());
    /// ```
    pub const fn new(value: i32) -> Result<Self, ShiftError> {
        if value >= MIN_SHIFT && value <= MAX_SHIFT {
            Ok(Self(value))
        } else {
            Err(ShiftError::OutOfRange(value))
        }
    }

    /// Parse a Shift from user-supplied text
    ///
    /// # Errors
    /// Returns `ShiftError::NotANumber` if the input is not an integer,
    /// or `ShiftError::OutOfRange` if it falls outside [1, 25].
    pub fn parse(input: &str) -> Result<Self, ShiftError> {
        let value: i32 = input
            .trim()
            .parse()
            .map_err(|_| ShiftError::NotANumber(input.to_string()))?;
        Self::new(value)
    }

    /// Get the raw shift value
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Iterate over every valid shift in ascending order (1 through 25)
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_SHIFT..=MAX_SHIFT).map(Self)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
