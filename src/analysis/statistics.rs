//! Basic text statistics
//!
//! Character and word counts over arbitrary input text. Only ASCII letters
//! count as alphabetic; everything is derived deterministically in one pass.

/// Character and word counts for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStatistics {
    pub total_chars: usize,
    pub alphabetic_chars: usize,
    pub non_alphabetic_chars: usize,
    pub uppercase_chars: usize,
    pub lowercase_chars: usize,
    pub word_count: usize,
}

/// Compute statistics for `text`
///
/// Characters are Unicode scalar values; alphabetic means ASCII A–Z/a–z.
/// Words are maximal runs of non-whitespace, so leading, trailing, and
/// repeated whitespace never produce empty words.
///
/// # Examples
/// ```
/// use caesar_toolkit::analysis::compute_statistics;
///
/// let stats = compute_statistics("Hi there!");
/// assert_eq!(stats.total_chars, 9);
/// assert_eq!(stats.alphabetic_chars, 7);
/// assert_eq!(stats.word_count, 2);
/// ```
#[must_use]
pub fn compute_statistics(text: &str) -> TextStatistics {
    let mut stats = TextStatistics {
        word_count: text.split_whitespace().count(),
        ..TextStatistics::default()
    };

    for ch in text.chars() {
        stats.total_chars += 1;
        if ch.is_ascii_uppercase() {
            stats.alphabetic_chars += 1;
            stats.uppercase_chars += 1;
        } else if ch.is_ascii_lowercase() {
            stats.alphabetic_chars += 1;
            stats.lowercase_chars += 1;
        } else {
            stats.non_alphabetic_chars += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_mixed_text() {
        let stats = compute_statistics("Hi there!");
        assert_eq!(
            stats,
            TextStatistics {
                total_chars: 9,
                alphabetic_chars: 7,
                non_alphabetic_chars: 2,
                uppercase_chars: 1,
                lowercase_chars: 6,
                word_count: 2,
            }
        );
    }

    #[test]
    fn empty_text_is_all_zeroes() {
        assert_eq!(compute_statistics(""), TextStatistics::default());
    }

    #[test]
    fn whitespace_only_has_no_words() {
        let stats = compute_statistics("   \t\n  ");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.alphabetic_chars, 0);
        assert_eq!(stats.total_chars, 7);
    }

    #[test]
    fn surrounding_whitespace_does_not_inflate_word_count() {
        assert_eq!(compute_statistics("  one   two  ").word_count, 2);
    }

    #[test]
    fn alphabetic_plus_non_alphabetic_equals_total() {
        let inputs = ["Hello, World!", "çà va? 123", "", "ALL CAPS", "no caps."];
        for text in inputs {
            let stats = compute_statistics(text);
            assert_eq!(
                stats.alphabetic_chars + stats.non_alphabetic_chars,
                stats.total_chars
            );
            assert_eq!(
                stats.uppercase_chars + stats.lowercase_chars,
                stats.alphabetic_chars
            );
        }
    }

    #[test]
    fn non_ascii_letters_count_as_non_alphabetic() {
        // Only A-Z/a-z participate in the cipher, so only they count here
        let stats = compute_statistics("héllo");
        assert_eq!(stats.total_chars, 5);
        assert_eq!(stats.alphabetic_chars, 4);
        assert_eq!(stats.non_alphabetic_chars, 1);
    }
}
