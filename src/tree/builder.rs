//! Suffix tree builder
//!
//! Builds a suffix tree online with Ukkonen's algorithm:
//! 1. Append the sentinel to the caller's text
//! 2. Run one phase per text position, extending every open suffix
//! 3. Freeze the shared leaf end so the finished tree is plain index ranges
//!
//! Each phase owes `remainder` suffix insertions. An insertion either hangs a
//! new leaf off the active node (rule 1), splits an edge in two (rule 2), or
//! finds the suffix already present and ends the phase early (rule 3). Suffix
//! links move the active point between insertions, which keeps the total work
//! linear in the text length.

use super::arena::{Arena, Node};
use super::error::ValidationError;
use super::text::TextBuffer;
use super::types::{NodeId, ROOT, TextPosition, TreeConfig};

/// Construction-time cursor
///
/// The point `length` symbols down the edge that leaves `node` with the
/// symbol at `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePoint {
    node: NodeId,
    /// Text position of the first symbol of the active edge (meaningless while `length == 0`)
    edge: TextPosition,
    length: usize,
    /// Suffix insertions still owed in the current phase
    remainder: usize,
}

impl ActivePoint {
    fn new() -> Self {
        Self {
            node: ROOT,
            edge: 0,
            length: 0,
            remainder: 0,
        }
    }
}

/// Mutable construction state; consumed when the tree is finished
struct Construction<'t> {
    text: &'t TextBuffer,
    arena: Arena,
    active: ActivePoint,
    /// Shared end of every leaf edge; advanced once per phase
    leaf_end: TextPosition,
}

impl<'t> Construction<'t> {
    fn new(text: &'t TextBuffer) -> Self {
        Self {
            text,
            arena: Arena::for_text(text.len()),
            active: ActivePoint::new(),
            leaf_end: 0,
        }
    }

    fn run(mut self) -> Arena {
        for pos in 0..self.text.len() {
            self.phase(pos);
        }
        debug_assert_eq!(self.active.remainder, 0, "sentinel must close every suffix");

        self.arena.freeze(self.leaf_end);
        self.arena
    }

    /// Extend the tree with the symbol at `pos`
    fn phase(&mut self, pos: TextPosition) {
        self.leaf_end = pos;
        self.active.remainder += 1;

        // Internal node created earlier in this phase whose suffix link is not yet known
        let mut pending: Option<NodeId> = None;

        while self.active.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = pos;
            }

            let edge_symbol = self.text[self.active.edge];
            let Some(next) = self.arena[self.active.node].child(edge_symbol) else {
                self.add_leaf(self.active.node, edge_symbol, pos);
                if let Some(node) = pending.take() {
                    self.arena[node].suffix_link = self.active.node;
                }
                self.active.remainder -= 1;
                self.advance(pos);
                continue;
            };

            if self.walk_down(next) {
                continue;
            }

            let probe = self.arena[next].start + self.active.length;
            if self.text[probe] == self.text[pos] {
                // Rule 3: the suffix is already in the tree
                self.active.length += 1;
                if let Some(node) = pending.take() {
                    self.arena[node].suffix_link = self.active.node;
                }
                break;
            }

            let split = self.split_edge(edge_symbol, next, pos);
            if let Some(node) = pending.replace(split) {
                self.arena[node].suffix_link = split;
            }
            self.active.remainder -= 1;
            self.advance(pos);
        }
    }

    /// Rule 1: hang a leaf for the current suffix off `parent`
    fn add_leaf(&mut self, parent: NodeId, symbol: u8, pos: TextPosition) -> NodeId {
        let leaf = self
            .arena
            .alloc(Node::leaf(pos, pos + 1 - self.active.remainder));
        self.arena.attach(parent, symbol, leaf);
        leaf
    }

    /// Skip/count: move onto `next` when the active length covers its whole edge
    fn walk_down(&mut self, next: NodeId) -> bool {
        let edge_len = self.arena[next].edge_len_with(self.leaf_end);
        if self.active.length < edge_len {
            return false;
        }

        self.active.edge += edge_len;
        self.active.length -= edge_len;
        self.active.node = next;
        true
    }

    /// Rule 2: split the edge into `next` at the active point and add a leaf
    /// for the current suffix under the new internal node
    fn split_edge(&mut self, edge_symbol: u8, next: NodeId, pos: TextPosition) -> NodeId {
        let start = self.arena[next].start;
        let split = self
            .arena
            .alloc(Node::internal(start, start + self.active.length - 1));
        self.arena.attach(self.active.node, edge_symbol, split);

        self.add_leaf(split, self.text[pos], pos);

        let demoted_start = start + self.active.length;
        self.arena[next].start = demoted_start;
        self.arena.attach(split, self.text[demoted_start], next);

        split
    }

    /// Move the active point to the next shorter suffix after an insertion
    fn advance(&mut self, pos: TextPosition) {
        if self.active.node == ROOT {
            if self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = pos + 1 - self.active.remainder;
            }
        } else {
            self.active.node = self.arena[self.active.node].suffix_link;
        }
    }
}

/// Builder for constructing suffix trees
pub struct SuffixTreeBuilder {
    config: TreeConfig,
}

impl SuffixTreeBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(TreeConfig::default())
    }

    /// Build the suffix tree of `text`
    ///
    /// Validation happens before any node is created. In debug builds the
    /// finished tree goes through the linear-time structure check and a
    /// violation panics, since it can only come from a construction defect.
    pub fn build(self, text: &[u8]) -> Result<SuffixTree, ValidationError> {
        let folded = self.config.fold(text);
        let text = TextBuffer::new(&folded, self.config.max_text_size)?;
        let arena = Construction::new(&text).run();

        let tree = SuffixTree {
            text,
            arena,
            config: self.config,
        };

        #[cfg(debug_assertions)]
        if let Err(violation) = tree.validate_structure() {
            panic!("suffix tree invariant violated: {violation}");
        }

        Ok(tree)
    }
}

/// A finished, read-only suffix tree
///
/// Holds no interior mutability, so it can be shared across threads and
/// queried concurrently.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    pub(crate) text: TextBuffer,
    pub(crate) arena: Arena,
    pub(crate) config: TreeConfig,
}

impl SuffixTree {
    /// The indexed text (case-folded if configured), sentinel excluded
    #[inline]
    pub fn text(&self) -> &[u8] {
        self.text.original()
    }

    /// Sentinel-terminated text the edge labels index into
    #[inline]
    pub fn text_buffer(&self) -> &TextBuffer {
        &self.text
    }

    /// Length of the indexed text, sentinel excluded
    #[inline]
    pub fn len(&self) -> usize {
        self.text.sentinel_index()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configuration used for building
    #[inline]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.arena[ROOT]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// Label of the edge entering `id` (empty for the root), or `None` for
    /// an id not in this tree
    pub fn label(&self, id: NodeId) -> Option<&[u8]> {
        self.arena.get(id).map(|node| self.label_of(node))
    }

    #[inline]
    pub(crate) fn label_of<'a>(&'a self, node: &Node) -> &'a [u8] {
        &self.text.as_slice()[node.start..node.start + node.edge_len()]
    }
}

/// Build a suffix tree with default configuration
pub fn build(text: &[u8]) -> Result<SuffixTree, ValidationError> {
    SuffixTreeBuilder::with_defaults().build(text)
}

/// Build a suffix tree with the given configuration
pub fn build_with_config(text: &[u8], config: &TreeConfig) -> Result<SuffixTree, ValidationError> {
    SuffixTreeBuilder::new(config.clone()).build(text)
}
