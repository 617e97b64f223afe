//! Node storage for the suffix tree
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. Child edges
//! are owning in the logical sense (each node has exactly one parent); suffix
//! links are plain ids and may point anywhere, including back up the tree.

use super::types::{NOT_A_LEAF, NodeId, ROOT, TextPosition};
use rustc_hash::FxHashMap;
use std::ops::{Index, IndexMut};

/// End of the edge label entering a node (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// The root has no incoming edge
    Unset,
    /// Leaf under construction; the end is the builder's shared leaf end
    Open,
    /// Fixed end position
    Closed(TextPosition),
}

/// A tree node: the edge entering it, its children and its suffix link
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) children: FxHashMap<u8, NodeId>,
    pub(crate) suffix_link: NodeId,
    pub(crate) start: TextPosition,
    pub(crate) end: EdgeEnd,
    pub(crate) suffix_index: usize,
}

impl Node {
    fn root() -> Self {
        Self {
            children: FxHashMap::default(),
            suffix_link: ROOT,
            start: 0,
            end: EdgeEnd::Unset,
            suffix_index: NOT_A_LEAF,
        }
    }

    /// New leaf whose edge runs from `start` to the shared leaf end
    pub(crate) fn leaf(start: TextPosition, suffix_index: usize) -> Self {
        Self {
            children: FxHashMap::default(),
            suffix_link: ROOT,
            start,
            end: EdgeEnd::Open,
            suffix_index,
        }
    }

    /// New internal node labelled `[start, end]`
    pub(crate) fn internal(start: TextPosition, end: TextPosition) -> Self {
        Self {
            children: FxHashMap::default(),
            suffix_link: ROOT,
            start,
            end: EdgeEnd::Closed(end),
            suffix_index: NOT_A_LEAF,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Offset of the suffix this leaf spells, `None` for internal nodes
    #[inline]
    pub fn suffix_index(&self) -> Option<usize> {
        (self.suffix_index != NOT_A_LEAF).then_some(self.suffix_index)
    }

    /// Node this node's suffix link points to
    #[inline]
    pub fn suffix_link(&self) -> NodeId {
        self.suffix_link
    }

    /// Child whose edge label starts with `symbol`
    #[inline]
    pub fn child(&self, symbol: u8) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }

    /// Children in no particular order
    pub fn children(&self) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.children.iter().map(|(&symbol, &id)| (symbol, id))
    }

    /// Children ordered by first symbol
    pub fn sorted_children(&self) -> Vec<(u8, NodeId)> {
        let mut children: Vec<_> = self.children().collect();
        children.sort_unstable_by_key(|&(symbol, _)| symbol);
        children
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Start of the incoming edge label
    #[inline]
    pub fn edge_start(&self) -> TextPosition {
        self.start
    }

    /// Incoming edge label length, reading open leaf ends through `leaf_end`
    #[inline]
    pub(crate) fn edge_len_with(&self, leaf_end: TextPosition) -> usize {
        match self.end {
            EdgeEnd::Unset => 0,
            EdgeEnd::Open => leaf_end + 1 - self.start,
            EdgeEnd::Closed(end) => end + 1 - self.start,
        }
    }

    /// Incoming edge label length on a finished tree
    #[inline]
    pub fn edge_len(&self) -> usize {
        match self.end {
            EdgeEnd::Unset => 0,
            EdgeEnd::Closed(end) => end + 1 - self.start,
            EdgeEnd::Open => unreachable!("leaf ends are frozen when construction finishes"),
        }
    }
}

/// Owns every node of one tree
#[derive(Debug, Clone)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    /// Arena holding only the root, with room for the `text_len` leaves
    /// every tree over that many symbols has
    ///
    /// Internal nodes (at most as many again) are allocated as splits happen.
    pub(crate) fn for_text(text_len: usize) -> Self {
        let mut nodes = Vec::with_capacity(text_len + 1);
        nodes.push(Node::root());
        Self { nodes }
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// Attach `child` under `parent`, replacing any child with the same key
    #[inline]
    pub(crate) fn attach(&mut self, parent: NodeId, symbol: u8, child: NodeId) {
        self[parent].children.insert(symbol, child);
    }

    /// Replace every open leaf end with `leaf_end`
    pub(crate) fn freeze(&mut self, leaf_end: TextPosition) {
        for node in &mut self.nodes {
            if node.end == EdgeEnd::Open {
                node.end = EdgeEnd::Closed(leaf_end);
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Nodes with their ids, in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(id, node)| (id as NodeId, node))
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }
}

impl IndexMut<NodeId> for Arena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }
}
