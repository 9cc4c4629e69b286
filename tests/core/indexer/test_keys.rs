// Key derivation properties

use mdindex::core::indexer::{derive_key, DEFAULT_KEY_WORDS};

#[test]
fn test_key_never_exceeds_limit() {
    let text = "word ".repeat(250);
    for n in [0, 1, 7, 100, 249, 250, 300] {
        let key = derive_key(&text, n);
        let count = key.split_whitespace().count();
        assert_eq!(count, n.min(250), "limit {n}");
    }
}

#[test]
fn test_key_keeps_all_tokens_under_limit() {
    let text = "Sleep at least\nseven   hours!";
    assert_eq!(derive_key(text, DEFAULT_KEY_WORDS), "Sleep at least seven hours!");
}

#[test]
fn test_key_idempotent() {
    let text = "\t## Why?\n\nRest helps   recovery";
    let key = derive_key(text, 4);
    assert_eq!(key, "## Why? Rest helps");
    assert_eq!(derive_key(&key, 4), key);
}
