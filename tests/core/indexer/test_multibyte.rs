// UTF-8 safety: multi-byte characters around boundaries

use crate::common::{reconstruct, segment_texts};
use mdindex::core::indexer::derive_key;

#[test]
fn test_cjk_and_accents() {
    assert_eq!(
        segment_texts("Très bien. 日本語のテキスト! Ça va?"),
        vec!["Très bien.", "日本語のテキスト!", "Ça va?"]
    );
}

#[test]
fn test_emoji_before_boundary() {
    assert_eq!(
        segment_texts("Ship it 🚀. Party 🎉🎊! Done ✅?"),
        vec!["Ship it 🚀.", "Party 🎉🎊!", "Done ✅?"]
    );
}

#[test]
fn test_fullwidth_punctuation_is_not_a_boundary() {
    // Only ASCII . ! ? terminate chunks
    let text = "第一句。 第二句！ 第三句";
    assert_eq!(segment_texts(text), vec![text.to_string()]);
}

#[test]
fn test_unicode_whitespace_separator() {
    // U+3000 ideographic space counts as whitespace
    assert_eq!(segment_texts("One.\u{3000}Two."), vec!["One.", "Two."]);
    assert_eq!(reconstruct("One.\u{3000}Two."), "One.\u{3000}Two.");
}

#[test]
fn test_multibyte_keys() {
    assert_eq!(derive_key("🦀 Rust  café\n日本", 3), "🦀 Rust café");
}
