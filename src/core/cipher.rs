//! Caesar cipher transform
//!
//! Using the formulas: C = (P + K) mod 26 for encryption, P = (C - K) mod 26
//! for decryption. Only ASCII letters rotate; everything else passes through
//! unchanged, preserving position and case.

use super::Shift;

/// Which way to apply the shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Sign-adjusted shift for this direction
    #[inline]
    #[must_use]
    const fn signed(self, shift: i32) -> i32 {
        match self {
            Self::Encrypt => shift,
            Self::Decrypt => -shift,
        }
    }
}

/// Apply the Caesar cipher to `text`
///
/// Accepts any integer shift and normalizes it modulo 26, so out-of-range and
/// negative values still produce the mathematically correct rotation. Callers
/// enforcing the user-facing [1, 25] range should validate through
/// [`Shift`](super::Shift) first.
///
/// The output always has the same number of characters as the input, uppercase
/// maps to uppercase and lowercase to lowercase, and a shift congruent to 0
/// modulo 26 is the identity.
///
/// # Examples
/// ```
/// use caesar_toolkit::core::{Direction, transform};
///
/// assert_eq!(transform("Hello, World!", 3, Direction::Encrypt), "Khoor, Zruog!");
/// assert_eq!(transform("Khoor, Zruog!", 3, Direction::Decrypt), "Hello, World!");
/// ```
#[must_use]
pub fn transform(text: &str, shift: i32, direction: Direction) -> String {
    // Reduce before negating so i32::MIN cannot overflow; the double modulo
    // then keeps the rotation non-negative for any signed input
    let rotation = (direction.signed(shift.rem_euclid(26)) % 26 + 26) % 26;
    let rotation = u8::try_from(rotation).unwrap_or(0);

    text.chars()
        .map(|ch| match ch {
            'A'..='Z' => rotate(ch, b'A', rotation),
            'a'..='z' => rotate(ch, b'a', rotation),
            other => other,
        })
        .collect()
}

/// Rotate a single ASCII letter within its case's alphabet
#[inline]
fn rotate(ch: char, base: u8, rotation: u8) -> char {
    let index = (ch as u8) - base;
    char::from(base + (index + rotation) % 26)
}

/// Encrypt with a validated shift
#[inline]
#[must_use]
pub fn encrypt(text: &str, shift: Shift) -> String {
    transform(text, shift.value(), Direction::Encrypt)
}

/// Decrypt with a validated shift
#[inline]
#[must_use]
pub fn decrypt(text: &str, shift: Shift) -> String {
    transform(text, shift.value(), Direction::Decrypt)
}
