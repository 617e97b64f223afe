//! Reference implementations for cross-checking the tree in tests

use proptest::prelude::*;

/// Every start of `pattern` in `text` by direct comparison, O(n·m)
pub fn naive_find(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..text.len()).collect();
    }
    if pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(pos, _)| pos)
        .collect()
}

/// Suffix array of `text` plus sentinel, by sorting every suffix
pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut terminated = text.to_vec();
    terminated.push(0);

    let mut sa: Vec<usize> = (0..terminated.len()).collect();
    sa.sort_by(|&a, &b| terminated[a..].cmp(&terminated[b..]));
    sa
}

/// Texts over {a, b, c}: small alphabets force deep repeats and many splits
pub fn small_alphabet_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_find() {
        assert_eq!(naive_find(b"aaaaa", b"aa"), vec![0, 1, 2, 3]);
        assert_eq!(naive_find(b"abc", b""), vec![0, 1, 2]);
        assert!(naive_find(b"ab", b"abc").is_empty());
    }

    #[test]
    fn test_naive_suffix_array() {
        assert_eq!(naive_suffix_array(b"banana"), vec![6, 5, 3, 1, 0, 4, 2]);
        assert_eq!(naive_suffix_array(b""), vec![0]);
    }
}
