//! Subtree traversals
//!
//! All traversals use an explicit stack, so highly repetitive texts (whose
//! trees are one long chain) cannot exhaust the call stack.

use super::arena::Arena;
use super::builder::SuffixTree;
use super::types::{NodeId, ROOT, TreeStats};

/// Iterator over the suffix indices of every leaf below a node, in no particular order
pub struct Leaves<'a> {
    arena: &'a Arena,
    stack: Vec<NodeId>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(arena: &'a Arena, from: NodeId) -> Self {
        Self {
            arena,
            stack: vec![from],
        }
    }
}

impl Iterator for Leaves<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(id) = self.stack.pop() {
            let node = &self.arena[id];
            if node.is_leaf() {
                if let Some(suffix) = node.suffix_index() {
                    return Some(suffix);
                }
                continue;
            }
            self.stack.extend(node.children().map(|(_, child)| child));
        }
        None
    }
}

impl SuffixTree {
    /// Suffix indices of all leaves below `id`, the sentinel suffix included
    pub fn leaves_below(&self, id: NodeId) -> Leaves<'_> {
        Leaves::new(&self.arena, id)
    }

    /// Suffix index of every leaf, in no particular order
    pub fn leaf_suffixes(&self) -> Vec<usize> {
        self.leaves_below(ROOT).collect()
    }

    /// Suffix array of the sentinel-terminated text
    ///
    /// Visiting children in ascending first-symbol order reaches the leaves in
    /// lexicographic suffix order. The sentinel suffix comes first.
    pub fn suffix_array(&self) -> Vec<usize> {
        let mut sa = Vec::with_capacity(self.len() + 1);
        let mut stack = vec![ROOT];

        while let Some(id) = stack.pop() {
            let node = &self.arena[id];
            if node.is_leaf() {
                sa.extend(node.suffix_index());
                continue;
            }
            // Reversed so the smallest symbol is popped first
            stack.extend(node.sorted_children().into_iter().rev().map(|(_, child)| child));
        }

        sa
    }

    /// Shape statistics: node counts and the deepest path label
    pub fn stats(&self) -> TreeStats {
        let mut leaf_count = 0;
        let mut max_depth = 0;
        let mut stack = vec![(ROOT, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.arena[id];
            let depth = depth + node.edge_len();
            max_depth = max_depth.max(depth);

            if node.is_leaf() {
                leaf_count += 1;
            } else {
                stack.extend(node.children().map(|(_, child)| (child, depth)));
            }
        }

        TreeStats {
            text_len: self.len(),
            node_count: self.node_count(),
            leaf_count,
            internal_count: self.node_count() - leaf_count,
            max_depth,
        }
    }
}
