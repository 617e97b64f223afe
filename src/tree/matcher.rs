//! Pattern matching on a finished suffix tree
//!
//! A query descends from the root comparing pattern symbols against edge
//! labels, O(m) for a pattern of length m. Every leaf below the point where
//! the pattern runs out is an occurrence, so enumerating k hits costs O(k)
//! on top of the descent, independent of the text length.

use super::builder::SuffixTree;
use super::types::{NodeId, ROOT, SENTINEL_BYTE};
use rayon::prelude::*;

impl SuffixTree {
    /// Node at or directly below the point where `pattern` ends, if the
    /// pattern occurs at all
    ///
    /// `pattern` must already be case-folded.
    fn descend(&self, pattern: &[u8]) -> Option<NodeId> {
        let mut node = ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let child = self.arena[node].child(pattern[matched])?;
            let label = self.label_of(&self.arena[child]);

            // Compare as much of the pattern as fits on this edge
            let take = label.len().min(pattern.len() - matched);
            if label[..take] != pattern[matched..matched + take] {
                return None;
            }

            matched += take;
            node = child;
        }

        Some(node)
    }

    /// Subtree root for a user pattern, applying case folding and rejecting
    /// patterns that could only match through the sentinel
    fn find(&self, pattern: &[u8]) -> Option<NodeId> {
        if memchr::memchr(SENTINEL_BYTE, pattern).is_some() {
            return None;
        }
        let pattern = self.config.fold(pattern);
        self.descend(&pattern)
    }

    /// Find every start position of `pattern` in the text
    ///
    /// Returns positions in ascending order, or an empty vector if the pattern
    /// does not occur. The empty pattern occurs at every position `0..len()`.
    pub fn locate(&self, pattern: &[u8]) -> Vec<usize> {
        let Some(node) = self.find(pattern) else {
            return Vec::new();
        };

        let sentinel_suffix = self.len();
        let mut positions: Vec<usize> = self
            .leaves_below(node)
            .filter(|&suffix| suffix != sentinel_suffix)
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Answer a batch of patterns in parallel
    ///
    /// Results are in the same order as `patterns`.
    pub fn locate_many<P>(&self, patterns: &[P]) -> Vec<Vec<usize>>
    where
        P: AsRef<[u8]> + Sync,
    {
        patterns
            .par_iter()
            .map(|pattern| self.locate(pattern.as_ref()))
            .collect()
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &[u8]) -> usize {
        let Some(node) = self.find(pattern) else {
            return 0;
        };

        let sentinel_suffix = self.len();
        self.leaves_below(node)
            .filter(|&suffix| suffix != sentinel_suffix)
            .count()
    }

    /// Check if `pattern` occurs in the text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        // Any node reached has a leaf other than the sentinel suffix below it,
        // except for the root of an empty text
        self.find(pattern)
            .is_some_and(|node| node != ROOT || !self.is_empty())
    }
}

/// Find every start position of `pattern` in the text indexed by `tree`
pub fn locate(tree: &SuffixTree, pattern: &[u8]) -> Vec<usize> {
    tree.locate(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{naive_find, small_alphabet_text};
    use crate::tree::{TreeConfig, build, build_with_config};
    use proptest::prelude::*;

    #[test]
    fn test_locate_banana() {
        let tree = build(b"banana").unwrap();

        assert_eq!(locate(&tree, b"ana"), vec![1, 3]);
        assert_eq!(locate(&tree, b"nan"), vec![2]);
        assert_eq!(locate(&tree, b"ba"), vec![0]);
        assert_eq!(locate(&tree, b"nana"), vec![2]);
        assert_eq!(locate(&tree, b"a"), vec![1, 3, 5]);
        assert_eq!(locate(&tree, b"x"), Vec::<usize>::new());
    }

    #[test]
    fn test_locate_abracadabra() {
        let tree = build(b"abracadabra").unwrap();

        assert_eq!(tree.locate(b"abra"), vec![0, 7]);
        assert_eq!(tree.locate(b"cad"), vec![4]);
        assert_eq!(tree.locate(b"ra"), vec![2, 9]);
        assert_eq!(tree.locate(b"a"), vec![0, 3, 5, 7, 10]);
    }

    #[test]
    fn test_locate_overlapping() {
        let tree = build(b"aaaaa").unwrap();
        assert_eq!(tree.locate(b"aa"), vec![0, 1, 2, 3]);
        assert_eq!(tree.locate(b"aaaaa"), vec![0]);
        assert!(tree.locate(b"aaaaaa").is_empty());
    }

    #[test]
    fn test_locate_mississippi() {
        let tree = build(b"mississippi").unwrap();
        assert_eq!(tree.locate(b"issi"), vec![1, 4]);
        assert_eq!(tree.locate(b"ss"), vec![2, 5]);
        assert_eq!(tree.locate(b"i"), vec![1, 4, 7, 10]);
        assert_eq!(tree.locate(b"ppi"), vec![8]);
    }

    #[test]
    fn test_locate_distinct_symbols() {
        let tree = build(b"abcdef").unwrap();
        assert_eq!(tree.locate(b"a"), vec![0]);
        assert_eq!(tree.locate(b"f"), vec![5]);
        assert_eq!(tree.locate(b"ef"), vec![4]);
        assert_eq!(tree.locate(b"abcdef"), vec![0]);
        assert!(tree.locate(b"abcdefg").is_empty());
        assert!(tree.locate(b"z").is_empty());
    }

    #[test]
    fn test_mismatch_inside_edge() {
        let tree = build(b"abcd").unwrap();
        // "abcd\0" is a single edge; the mismatch falls in its middle
        assert!(tree.locate(b"abd").is_empty());
        assert!(tree.locate(b"abcde").is_empty());
    }

    #[test]
    fn test_empty_pattern() {
        let tree = build(b"banana").unwrap();
        assert_eq!(tree.locate(b""), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(tree.count(b""), 6);
        assert!(tree.contains(b""));
    }

    #[test]
    fn test_empty_text() {
        let tree = build(b"").unwrap();
        assert!(tree.locate(b"a").is_empty());
        assert!(tree.locate(b"").is_empty());
        assert_eq!(tree.count(b""), 0);
        assert!(!tree.contains(b""));
        assert!(!tree.contains(b"a"));
    }

    #[test]
    fn test_sentinel_never_visible() {
        let tree = build(b"banana").unwrap();
        assert!(tree.locate(b"\x00").is_empty());
        assert!(tree.locate(b"a\x00").is_empty());
        assert!(!tree.contains(b"na\x00"));
        assert_eq!(tree.count(b"\x00"), 0);
    }

    #[test]
    fn test_case_insensitive_queries() {
        let config = TreeConfig {
            case_insensitive: true,
            ..Default::default()
        };
        let tree = build_with_config(b"Hello hello HELLO", &config).unwrap();
        assert_eq!(tree.locate(b"hello"), vec![0, 6, 12]);
        assert_eq!(tree.locate(b"HeLLo"), vec![0, 6, 12]);

        let sensitive = build(b"Hello hello HELLO").unwrap();
        assert_eq!(sensitive.locate(b"hello"), vec![6]);
    }

    #[test]
    fn test_count_and_contains() {
        let tree = build(b"abracadabra").unwrap();
        assert_eq!(tree.count(b"a"), 5);
        assert_eq!(tree.count(b"abra"), 2);
        assert_eq!(tree.count(b"zz"), 0);
        assert!(tree.contains(b"cada"));
        assert!(!tree.contains(b"cadd"));
    }

    #[test]
    fn test_locate_many_keeps_order() {
        let tree = build(b"abracadabra").unwrap();
        let patterns = ["abra", "x", "a", "", "bra"];
        let results = tree.locate_many(&patterns);

        assert_eq!(
            results,
            vec![
                vec![0, 7],
                vec![],
                vec![0, 3, 5, 7, 10],
                (0..11).collect::<Vec<_>>(),
                vec![1, 8],
            ]
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let tree = build(b"mississippi").unwrap();
        let tree = &tree;
        std::thread::scope(|scope| {
            let handles: Vec<_> = ["issi", "ss", "p"]
                .into_iter()
                .map(|pattern| scope.spawn(move || tree.locate(pattern.as_bytes())))
                .collect();
            let results: Vec<Vec<usize>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(results, vec![vec![1, 4], vec![2, 5], vec![8, 9]]);
        });
    }

    #[test]
    fn test_every_substring_located() {
        let text = b"abcabxabcdabcabxabcd";
        let tree = build(text).unwrap();

        for i in 0..text.len() {
            for k in 1..=text.len() - i {
                let hits = tree.locate(&text[i..i + k]);
                assert!(hits.contains(&i), "{:?} at {}", &text[i..i + k], i);
            }
        }
    }

    #[test]
    fn test_random_texts_against_naive() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for round in 0..200 {
            let alphabet: &[u8] = if round % 2 == 0 { b"ab" } else { b"acgt" };
            let len = rng.gen_range(0..120);
            let text: Vec<u8> = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let tree = build(&text).unwrap();

            for _ in 0..20 {
                let pattern_len = rng.gen_range(0..6);
                let pattern: Vec<u8> = (0..pattern_len)
                    .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                    .collect();
                assert_eq!(
                    tree.locate(&pattern),
                    naive_find(&text, &pattern),
                    "text {:?} pattern {:?}",
                    String::from_utf8_lossy(&text),
                    String::from_utf8_lossy(&pattern)
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_matches_naive_scan(
            text in small_alphabet_text(40),
            pattern in small_alphabet_text(4),
        ) {
            let tree = build(&text).unwrap();
            prop_assert_eq!(tree.locate(&pattern), naive_find(&text, &pattern));
            prop_assert_eq!(tree.count(&pattern), naive_find(&text, &pattern).len());
        }

        #[test]
        fn prop_leaves_are_permutation(text in small_alphabet_text(60)) {
            let tree = build(&text).unwrap();
            let mut leaves = tree.leaf_suffixes();
            leaves.sort_unstable();
            prop_assert_eq!(leaves, (0..=text.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_substrings_found(text in small_alphabet_text(30), start in 0usize..30, len in 1usize..8) {
            prop_assume!(start < text.len());
            let end = (start + len).min(text.len());
            let tree = build(&text).unwrap();
            prop_assert!(tree.locate(&text[start..end]).contains(&start));
        }
    }
}
