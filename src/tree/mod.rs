//! Suffix tree module
//!
//! Builds a suffix tree over a byte text in amortized linear time (Ukkonen's
//! online algorithm) and answers exact substring queries by descending it.
//!
//! ## Architecture
//!
//! - `text`: Sentinel-terminated text buffer
//! - `arena`: Node storage; nodes refer to each other by id
//! - `builder`: Online construction and the finished [`SuffixTree`]
//! - `matcher`: Pattern descent and occurrence listing
//! - `collect`: Leaf enumeration, suffix array and statistics traversals
//! - `validate`: Structural invariant checks
//! - `types`: Core type definitions and configuration
//!
//! ## Lifecycle
//!
//! Construction and querying are disjoint: [`build`] consumes the text and
//! returns a tree with no mutating operations. Leaves share one end marker
//! while the tree grows; it is frozen into every leaf before [`build`]
//! returns.

pub mod arena;
pub mod builder;
pub mod collect;
pub mod error;
pub mod matcher;
pub mod text;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use arena::{EdgeEnd, Node};
pub use builder::{SuffixTree, SuffixTreeBuilder, build, build_with_config};
pub use collect::Leaves;
pub use error::{InvariantViolation, ValidationError};
pub use matcher::locate;
pub use text::TextBuffer;
pub use types::{NodeId, SENTINEL_BYTE, TreeConfig, TreeStats};
