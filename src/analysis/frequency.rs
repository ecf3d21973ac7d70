//! Letter frequency analysis

use rustc_hash::FxHashMap;

/// Occurrence counts per lowercase letter a–z
pub type FrequencyTable = FxHashMap<char, usize>;

/// Count letter occurrences in the lowercased projection of `text`
///
/// Everything outside a–z (after lowercasing) is discarded. Letters that never
/// occur are absent from the table rather than present with a zero count, so
/// callers wanting all 26 entries must default-fill.
///
/// # Examples
/// ```
/// use caesar_toolkit::analysis::frequency_analysis;
///
/// let table = frequency_analysis("AAB");
/// assert_eq!(table.get(&'a'), Some(&2));
/// assert_eq!(table.get(&'b'), Some(&1));
/// assert_eq!(table.get(&'c'), None);
/// ```
#[must_use]
pub fn frequency_analysis(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for ch in text.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() {
            *table.entry(ch).or_insert(0) += 1;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_case_insensitive() {
        let table = frequency_analysis("AAB");
        assert_eq!(table.get(&'a'), Some(&2));
        assert_eq!(table.get(&'b'), Some(&1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn absent_letters_are_absent_not_zero() {
        let table = frequency_analysis("hello");
        assert!(!table.contains_key(&'z'));
    }

    #[test]
    fn ignores_digits_punctuation_and_whitespace() {
        let table = frequency_analysis("a1 b2, c3!");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&'a'), Some(&1));
        assert_eq!(table.get(&'b'), Some(&1));
        assert_eq!(table.get(&'c'), Some(&1));
    }

    #[test]
    fn ignores_non_ascii_letters() {
        let table = frequency_analysis("éàç");
        assert!(table.is_empty());
    }

    #[test]
    fn total_count_equals_ascii_letter_count() {
        let text = "The quick brown fox; 42 times!";
        let letters = text.chars().filter(char::is_ascii_alphabetic).count();
        let total: usize = frequency_analysis(text).values().sum();
        assert_eq!(total, letters);
    }

    #[test]
    fn empty_text_gives_empty_table() {
        assert!(frequency_analysis("").is_empty());
    }
}
