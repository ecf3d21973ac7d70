//! Brute-force decryption ranking
//!
//! Tries every shift and ranks the resulting plaintexts by a readability
//! heuristic. This is a best-effort ranking, not a cryptographic attack:
//! short or atypical inputs can rank the true plaintext below decoys.

use rayon::prelude::*;

use crate::core::{Shift, decrypt};
use crate::wordlists::COMMON_WORD_SET;

/// One candidate plaintext produced by trying a single shift
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionCandidate {
    pub shift: Shift,
    pub text: String,
    pub score: u32,
}

/// Decrypt `cipher_text` under every shift and rank the results
///
/// Always returns exactly 25 candidates, one per shift, sorted descending by
/// readability score. Ties keep ascending shift order: candidates are generated
/// for shifts 1 through 25 in order and the sort is stable.
///
/// # Examples
/// ```
/// use caesar_toolkit::analysis::suggest_decryption;
///
/// let candidates = suggest_decryption("Wkh vhfuhw phhwlqj");
/// assert_eq!(candidates.len(), 25);
/// assert_eq!(candidates[0].shift.value(), 3);
/// ```
#[must_use]
pub fn suggest_decryption(cipher_text: &str) -> Vec<DecryptionCandidate> {
    let shifts: Vec<Shift> = Shift::all().collect();

    let mut candidates: Vec<DecryptionCandidate> = shifts
        .into_par_iter()
        .map(|shift| {
            let text = decrypt(cipher_text, shift);
            let score = readability_score(&text);
            DecryptionCandidate { shift, text, score }
        })
        .collect();

    // Stable sort preserves ascending shift order among equal scores
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

/// Heuristic estimate of how English-like `text` is
///
/// Splits on whitespace after lowercasing, then per word awards +2 for an exact
/// match against the common-word list and, independently, +1 when the word is
/// 3 to 8 characters long. Punctuation stays attached to words, so "the," earns
/// only the length bonus. The formula is frozen for ranking compatibility.
#[must_use]
pub fn readability_score(text: &str) -> u32 {
    let lowered = text.to_lowercase();
    let mut score = 0;

    for word in lowered.split_whitespace() {
        if COMMON_WORD_SET.contains(word) {
            score += 2;
        }
        let len = word.chars().count();
        if (3..=8).contains(&len) {
            score += 1;
        }
    }

    score
}
