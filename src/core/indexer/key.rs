//! Record key derivation.
//!
//! A key is the leading words of a chunk, normalized to single spaces.
//! Keys are display and lookup aids only; two chunks that open with
//! the same words get the same key.

/// Default number of words kept in a record key
pub const DEFAULT_KEY_WORDS: usize = 100;

/// Return the first `max_words` whitespace-delimited tokens of `text`
/// joined by single ASCII spaces.
///
/// Any whitespace run (spaces, tabs, newlines) counts as one delimiter
/// and leading or trailing whitespace produces no empty tokens. A text
/// with fewer than `max_words` tokens keeps all of them.
///
/// # Example
///
/// ```
/// use mdindex::core::indexer::derive_key;
///
/// assert_eq!(derive_key("  one\ttwo\n\nthree four", 3), "one two three");
/// assert_eq!(derive_key("short", 100), "short");
/// ```
pub fn derive_key(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
