#![no_main]

use arbitrary::Arbitrary;
use gstree::tree::{GeneralizedSuffixTree, Occurrence, Symbol, TreeConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    texts: Vec<Vec<u8>>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Small alphabet and bounded sizes keep the brute-force check cheap
    let texts: Vec<Vec<Symbol>> = input
        .texts
        .iter()
        .take(8)
        .map(|t| t.iter().take(256).map(|b| Symbol::from(b % 4)).collect())
        .collect();
    let pattern: Vec<Symbol> = input.pattern.iter().take(16).map(|b| Symbol::from(b % 4)).collect();

    let mut tree = GeneralizedSuffixTree::with_config(TreeConfig {
        text_count: texts.len(),
        alphabet_size: 4,
    })
    .unwrap();
    for (i, text) in texts.iter().enumerate() {
        tree.insert(text, i).expect("in-range insert must succeed");
    }

    let Ok(found) = tree.search(&pattern) else {
        assert!(pattern.is_empty());
        return;
    };

    let mut expected = Vec::new();
    for (i, text) in texts.iter().enumerate() {
        for k in 0..text.len() {
            if text[k..].starts_with(&pattern) {
                expected.push(Occurrence::new(i, k));
            }
        }
    }
    assert_eq!(found, expected);
});
