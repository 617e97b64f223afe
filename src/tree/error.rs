//! Error types for suffix tree construction
//!
//! Input problems surface as [`ValidationError`] before construction starts.
//! [`InvariantViolation`] describes a malformed tree and is only ever produced
//! by [`SuffixTree::validate`](super::SuffixTree::validate).

use super::types::NodeId;
use thiserror::Error;

/// Rejected input; nothing has been built yet, so the call can be retried
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text contains the reserved sentinel byte 0x00 at offset {position}")]
    ContainsSentinel { position: usize },

    #[error("text of {len} bytes exceeds the limit of {max} bytes")]
    TextTooLarge { len: usize, max: u64 },
}

/// A structural defect in a built tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node carries an edge label")]
    RootHasLabel,

    #[error("root suffix link points to node {target} instead of itself")]
    RootSuffixLink { target: NodeId },

    #[error("node {node} has no edge label")]
    MissingLabel { node: NodeId },

    #[error("node {node} still reads its end through the shared leaf end")]
    OpenLeafEnd { node: NodeId },

    #[error("node {node} has an empty edge label")]
    EmptyLabel { node: NodeId },

    #[error("node {node} label [{start}, {end}] lies outside the text")]
    LabelOutOfBounds {
        node: NodeId,
        start: usize,
        end: usize,
    },

    #[error("child {child} of node {parent} is keyed by {key:#04x} but its label starts with {first:#04x}")]
    ChildKeyMismatch {
        parent: NodeId,
        child: NodeId,
        key: u8,
        first: u8,
    },

    #[error("internal node {node} has {children} child(ren)")]
    UnaryInternalNode { node: NodeId, children: usize },

    #[error("leaf {node} has no suffix index")]
    LeafWithoutSuffix { node: NodeId },

    #[error("internal node {node} carries suffix index {suffix_index}")]
    InternalWithSuffix { node: NodeId, suffix_index: usize },

    #[error("expected {expected} leaves, found {found}")]
    LeafCount { expected: usize, found: usize },

    #[error("suffix index {suffix_index} is out of range or repeated")]
    SuffixNotPermutation { suffix_index: usize },

    #[error("path to leaf {node} does not spell suffix {suffix_index}")]
    PathMismatch { node: NodeId, suffix_index: usize },

    #[error("node {node} has a suffix link to missing node {target}")]
    DanglingSuffixLink { node: NodeId, target: NodeId },

    #[error("{unreachable} node(s) are not reachable from the root")]
    UnreachableNodes { unreachable: usize },
}
