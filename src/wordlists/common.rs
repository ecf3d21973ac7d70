//! Reference list of common English words
//!
//! Used by the readability heuristic to rank brute-force decryption candidates.
//! The list and its ordering are frozen for score compatibility; changing it
//! changes every ranking the cracker produces.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Common short English words, lowercase
pub const COMMON_WORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "of", "it", "you", "that", "he", "was", "for", "on", "are",
    "as", "with", "his", "they", "i", "at", "be", "this", "have", "from", "or", "one", "had", "by",
    "word", "but", "not", "what", "all", "were", "we", "when", "your", "can", "said", "there",
    "use", "an", "each", "which", "she", "do", "how", "their", "if", "will", "up", "other",
    "about", "out", "many", "then", "them", "these", "so", "some", "her", "would", "make", "like",
    "into", "him", "has", "two", "more", "go", "no", "way", "could", "my", "than", "first", "been",
    "call", "who", "oil", "its", "now", "find", "long", "down", "day", "did", "get", "come",
    "made", "may", "part",
];

/// Lookup set over [`COMMON_WORDS`], built once per process
pub static COMMON_WORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| COMMON_WORDS.iter().copied().collect());
