//! # sxt - suffix tree substring locator
//!
//! sxt builds a suffix tree over a byte text with Ukkonen's online
//! algorithm in O(n) time and space, then answers "where does this pattern
//! occur?" in O(m + k) for a pattern of length m with k occurrences.
//!
//! ## Architecture
//!
//! - [`tree`] - Node arena, construction, queries, traversals and validation
//! - [`output`] - Result formatting (ripgrep-style or JSON)
//! - [`utils`] - Input mapping, line lookup and progress display
//!
//! ## Quick Start
//!
//! ```
//! let tree = sxt::build(b"banana").unwrap();
//!
//! assert_eq!(sxt::locate(&tree, b"ana"), vec![1, 3]);
//! assert_eq!(tree.locate(b"a"), vec![1, 3, 5]);
//! assert!(tree.locate(b"x").is_empty());
//! ```
//!
//! The text must not contain the byte `0x00`, which terminates it internally
//! so that every suffix ends at its own leaf. A built tree is immutable and
//! can be queried from many threads at once.

pub mod output;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use tree::{
    InvariantViolation, SuffixTree, SuffixTreeBuilder, TreeConfig, TreeStats, ValidationError,
    build, build_with_config, locate,
};
