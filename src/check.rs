//! Structural invariant checking.
//!
//! [`OrderedTree::validate`] walks the whole tree and reports the first broken rule it finds.
//! It is O(n) and meant for tests, fuzzing and debugging, not for the hot path.

use std::fmt::Debug;

use crate::error::InvariantError;
use crate::node::Side;
use crate::tree::OrderedTree;
use crate::utils::arena::NodeId;

fn render<K: Debug>(key: &K) -> String {
    format!("{key:?}")
}

impl<K: Ord + Debug> OrderedTree<K> {
    /// Check every structural invariant of the tree.
    ///
    /// On success returns the black height: the number of black nodes on any path from the root
    /// down to a missing child, root included. An empty tree has black height 0.
    pub fn validate(&self) -> Result<usize, InvariantError> {
        let Some(root_id) = self.root_id() else {
            return match self.size() {
                0 => Ok(0),
                expected => Err(InvariantError::SizeMismatch { expected, found: 0 }),
            };
        };

        let root = self.node(root_id);
        if root.is_red() {
            return Err(InvariantError::RedRoot {
                key: render(&root.key),
            });
        }
        if root.parent.is_some() {
            return Err(InvariantError::RootHasParent {
                key: render(&root.key),
            });
        }

        let mut found = 0;
        let black_height = self.validate_subtree(root_id, None, None, &mut found)?;
        if found != self.size() {
            return Err(InvariantError::SizeMismatch {
                expected: self.size(),
                found,
            });
        }
        Ok(black_height)
    }

    fn validate_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        found: &mut usize,
    ) -> Result<usize, InvariantError> {
        *found += 1;
        // More nodes than the tree claims to hold means the links loop back on themselves.
        if *found > self.size() {
            return Err(InvariantError::SizeMismatch {
                expected: self.size(),
                found: *found,
            });
        }

        let node = self.node(id);
        let out_of_order = lower
            .filter(|l| node.key <= **l)
            .or(upper.filter(|u| node.key >= **u));
        if let Some(bound) = out_of_order {
            return Err(InvariantError::OrderViolation {
                key: render(&node.key),
                bound: render(bound),
            });
        }

        let mut heights = [0; 2];
        for (slot, side) in [Side::Left, Side::Right].into_iter().enumerate() {
            let Some(child_id) = node.child(side) else {
                continue;
            };
            let child = self.node(child_id);
            if child.parent != Some(id) {
                return Err(InvariantError::BrokenParentLink {
                    parent: render(&node.key),
                    child: render(&child.key),
                });
            }
            if node.is_red() && child.is_red() {
                return Err(InvariantError::RedRedEdge {
                    parent: render(&node.key),
                    child: render(&child.key),
                });
            }
            let (lower, upper) = match side {
                Side::Left => (lower, Some(&node.key)),
                Side::Right => (Some(&node.key), upper),
            };
            heights[slot] = self.validate_subtree(child_id, lower, upper, found)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantError::BlackHeightMismatch {
                key: render(&node.key),
                left,
                right,
            });
        }
        Ok(left + usize::from(!node.is_red()))
    }
}
