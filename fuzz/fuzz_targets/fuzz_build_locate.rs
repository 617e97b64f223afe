#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    patterns: Vec<Vec<u8>>,
}

fn naive_find(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..text.len()).collect();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

fuzz_target!(|input: Input| {
    // Texts holding the sentinel must be rejected, never panic
    let Ok(tree) = sxt::build(&input.text) else {
        assert!(input.text.contains(&0));
        return;
    };

    tree.validate().unwrap();

    for pattern in input.patterns.iter().take(8) {
        let expected = if pattern.contains(&0) {
            Vec::new()
        } else {
            naive_find(&input.text, pattern)
        };
        assert_eq!(tree.locate(pattern), expected);
    }
});
