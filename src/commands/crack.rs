//! Brute-force cracking command

use super::{CommandError, require_text};
use crate::analysis::{DecryptionCandidate, suggest_decryption};

/// Rank every possible decryption of `cipher_text` by readability
///
/// Returns all 25 candidates, best first; the caller decides how many to show.
///
/// # Errors
///
/// Returns an error if `cipher_text` is empty or whitespace-only.
pub fn crack_text(cipher_text: &str) -> Result<Vec<DecryptionCandidate>, CommandError> {
    let cipher_text = require_text(cipher_text)?;
    Ok(suggest_decryption(cipher_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Shift, encrypt};

    #[test]
    fn returns_full_ranking() {
        let candidates = crack_text("Wkh phhwlqj lv dw grqh").unwrap();
        assert_eq!(candidates.len(), 25);
    }

    #[test]
    fn best_candidate_first_for_english_input() {
        let shift = Shift::new(19).unwrap();
        let cipher = encrypt("we will make our way down to the long road", shift);

        let candidates = crack_text(&cipher).unwrap();
        assert_eq!(candidates[0].shift, shift);
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(crack_text("  "), Err(CommandError::EmptyInput));
    }
}
