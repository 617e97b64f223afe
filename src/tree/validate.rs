//! Structural checks for a finished suffix tree

use super::arena::EdgeEnd;
use super::builder::SuffixTree;
use super::error::InvariantViolation;
use super::types::{NOT_A_LEAF, NodeId, ROOT};

enum Visit {
    Enter { id: NodeId, depth: usize },
    Exit,
}

impl SuffixTree {
    /// Check every structural invariant of the tree
    ///
    /// Verifies labels, child keys, branching, leaf suffix indices, suffix
    /// link targets and reachability, and that the path to every leaf spells
    /// exactly the suffix its index names. Cost grows with the summed depth of
    /// all leaves, which is quadratic on repetitive texts; debug builds run
    /// [`validate_structure`](Self::validate_structure) instead.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.validate_nodes()?;
        self.validate_paths(true)
    }

    /// Every check of [`validate`](Self::validate) except comparing path
    /// labels symbol by symbol
    ///
    /// Leaves are still required to sit at the depth their suffix implies.
    /// Linear in the tree size, so it is cheap enough to run after every build.
    pub fn validate_structure(&self) -> Result<(), InvariantViolation> {
        self.validate_nodes()?;
        self.validate_paths(false)
    }

    /// Per-node checks that need no traversal
    fn validate_nodes(&self) -> Result<(), InvariantViolation> {
        let text = self.text.as_slice();

        for (id, node) in self.arena.iter() {
            if node.suffix_link as usize >= self.arena.len() {
                return Err(InvariantViolation::DanglingSuffixLink {
                    node: id,
                    target: node.suffix_link,
                });
            }

            if id == ROOT {
                if node.end != EdgeEnd::Unset {
                    return Err(InvariantViolation::RootHasLabel);
                }
                if node.suffix_link != ROOT {
                    return Err(InvariantViolation::RootSuffixLink {
                        target: node.suffix_link,
                    });
                }
            } else {
                let end = match node.end {
                    EdgeEnd::Unset => return Err(InvariantViolation::MissingLabel { node: id }),
                    EdgeEnd::Open => return Err(InvariantViolation::OpenLeafEnd { node: id }),
                    EdgeEnd::Closed(end) => end,
                };
                if end < node.start {
                    return Err(InvariantViolation::EmptyLabel { node: id });
                }
                if end >= text.len() {
                    return Err(InvariantViolation::LabelOutOfBounds {
                        node: id,
                        start: node.start,
                        end,
                    });
                }

                if node.is_leaf() {
                    if node.suffix_index == NOT_A_LEAF {
                        return Err(InvariantViolation::LeafWithoutSuffix { node: id });
                    }
                } else {
                    if node.suffix_index != NOT_A_LEAF {
                        return Err(InvariantViolation::InternalWithSuffix {
                            node: id,
                            suffix_index: node.suffix_index,
                        });
                    }
                    if node.child_count() < 2 {
                        return Err(InvariantViolation::UnaryInternalNode {
                            node: id,
                            children: node.child_count(),
                        });
                    }
                }
            }

            for (key, child) in node.children() {
                let first = text[self.arena[child].start];
                if key != first {
                    return Err(InvariantViolation::ChildKeyMismatch {
                        parent: id,
                        child,
                        key,
                        first,
                    });
                }
            }
        }

        Ok(())
    }

    /// Walk every root-to-leaf path; with `spell` set, keep the current
    /// path's edges on a stack and compare them against each leaf's suffix
    fn validate_paths(&self, spell: bool) -> Result<(), InvariantViolation> {
        let text = self.text.as_slice();
        let expected_leaves = text.len();

        let mut seen_suffix = vec![false; expected_leaves];
        let mut leaf_count = 0;
        let mut visited = 0;

        // (label start, label length, depth above the edge)
        let mut path: Vec<(usize, usize, usize)> = Vec::new();
        let mut stack = vec![Visit::Enter { id: ROOT, depth: 0 }];

        while let Some(visit) = stack.pop() {
            let (id, depth) = match visit {
                Visit::Enter { id, depth } => (id, depth),
                Visit::Exit => {
                    path.pop();
                    continue;
                }
            };

            visited += 1;
            let node = &self.arena[id];
            let len = node.edge_len();
            if spell && id != ROOT {
                path.push((node.start, len, depth));
                stack.push(Visit::Exit);
            }
            let depth = depth + len;

            if !node.is_leaf() {
                stack.extend(node.children().map(|(_, child)| Visit::Enter { id: child, depth }));
                continue;
            }

            leaf_count += 1;
            let suffix = node.suffix_index;
            if suffix >= expected_leaves || seen_suffix[suffix] {
                return Err(InvariantViolation::SuffixNotPermutation {
                    suffix_index: suffix,
                });
            }
            seen_suffix[suffix] = true;

            let spells_suffix = suffix + depth == text.len()
                && (!spell || path.iter().all(|&(start, len, above)| {
                    text[start..start + len] == text[suffix + above..suffix + above + len]
                }));
            if !spells_suffix {
                return Err(InvariantViolation::PathMismatch {
                    node: id,
                    suffix_index: suffix,
                });
            }
        }

        if leaf_count != expected_leaves {
            return Err(InvariantViolation::LeafCount {
                expected: expected_leaves,
                found: leaf_count,
            });
        }

        if visited != self.arena.len() {
            return Err(InvariantViolation::UnreachableNodes {
                unreachable: self.arena.len() - visited,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::arena::Node;
    use crate::tree::build;
    use std::time::{Duration, Instant};

    #[test]
    fn test_valid_trees() {
        for text in [&b""[..], b"a", b"banana", b"mississippi", b"abcabxabcd", b"aaaaaaaaa"] {
            assert_eq!(build(text).unwrap().validate(), Ok(()), "text {:?}", text);
        }
    }

    #[test]
    fn test_structure_check() {
        for text in [&b""[..], b"banana", b"mississippi", b"abcabxabcd"] {
            assert_eq!(build(text).unwrap().validate_structure(), Ok(()));
        }

        let mut tree = build(b"banana").unwrap();
        let leaf = tree.root().child(b'b').unwrap();
        tree.arena[leaf].suffix_index = 1;
        assert!(tree.validate_structure().is_err());
    }

    #[test]
    fn test_structure_check_on_long_run() {
        let tree = build(&vec![b'a'; 100_000]).unwrap();
        let start = Instant::now();
        assert_eq!(tree.validate_structure(), Ok(()));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_detects_unary_internal_node() {
        let mut tree = build(b"banana").unwrap();
        let na = tree.root().child(b'n').unwrap();
        tree.arena[na].children.remove(&0);

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::UnaryInternalNode { node: na, children: 1 })
        );
    }

    #[test]
    fn test_detects_key_mismatch() {
        let mut tree = build(b"banana").unwrap();
        let leaf = tree.root().child(b'b').unwrap();
        tree.arena[ROOT].children.remove(&b'b');
        tree.arena.attach(ROOT, b'q', leaf);

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::ChildKeyMismatch {
                parent: ROOT,
                child: leaf,
                key: b'q',
                first: b'b',
            })
        );
    }

    #[test]
    fn test_detects_wrong_suffix_index() {
        let mut tree = build(b"banana").unwrap();
        let leaf = tree.root().child(b'b').unwrap();
        let other = tree.root().child(0).unwrap();
        tree.arena[leaf].suffix_index = 6;
        tree.arena[other].suffix_index = 0;

        assert!(matches!(
            tree.validate(),
            Err(InvariantViolation::PathMismatch { .. })
        ));
    }

    #[test]
    fn test_detects_open_leaf() {
        let mut tree = build(b"ab").unwrap();
        let leaf = tree.root().child(b'a').unwrap();
        tree.arena[leaf].end = EdgeEnd::Open;

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::OpenLeafEnd { node: leaf })
        );
    }

    #[test]
    fn test_detects_unreachable_node() {
        let mut tree = build(b"ab").unwrap();
        let mut orphan = Node::leaf(0, 0);
        orphan.end = EdgeEnd::Closed(2);
        tree.arena.alloc(orphan);

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::UnreachableNodes { unreachable: 1 })
        );
    }

    #[test]
    fn test_detects_dangling_suffix_link() {
        let mut tree = build(b"banana").unwrap();
        let a = tree.root().child(b'a').unwrap();
        tree.arena[a].suffix_link = 999;

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::DanglingSuffixLink { node: a, target: 999 })
        );
    }
}
