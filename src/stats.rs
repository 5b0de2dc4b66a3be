//! Statistics and introspection for ordered trees.
//!
//! This module gathers facts about the shape of a Red-Black tree: how many nodes of each color
//! it holds, how deep its shallowest and deepest paths go, and how much rebalancing it took to
//! get there.
//!
//! Statistics can be useful for:
//! - Checking the height bound on real workloads
//! - Comparing insert orders by the rotations they cost
//! - Debugging tree structure issues

use crate::tree::OrderedTree;
use crate::utils::arena::NodeId;

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub num_nodes: usize,
    pub num_red: usize,
    pub num_black: usize,
    pub num_leaves: usize,
    /// Nodes on the longest root-to-leaf path.
    pub max_height: usize,
    /// Nodes on the shortest path from the root to a missing child.
    pub min_height: usize,
    /// Black nodes on the leftmost root-to-boundary path, root included.
    pub black_height: usize,
    pub rotations: u64,
}

impl<K> TreeStatsTrait for OrderedTree<K> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            rotations: self.rotations(),
            ..Default::default()
        };

        let Some(root) = self.root_id() else {
            return stats;
        };

        let mut cursor = Some(root);
        while let Some(id) = cursor {
            let node = self.node(id);
            if !node.is_red() {
                stats.black_height += 1;
            }
            cursor = node.left;
        }

        stats.min_height = usize::MAX;
        update_tree_stats_recurse(self, root, &mut stats, 1);
        stats
    }
}

fn update_tree_stats_recurse<K>(
    tree: &OrderedTree<K>,
    id: NodeId,
    tree_stats: &mut TreeStats,
    height: usize,
) {
    let node = tree.node(id);
    tree_stats.num_nodes += 1;
    if node.is_red() {
        tree_stats.num_red += 1;
    } else {
        tree_stats.num_black += 1;
    }
    if height > tree_stats.max_height {
        tree_stats.max_height = height;
    }
    if node.left.is_none() || node.right.is_none() {
        tree_stats.min_height = tree_stats.min_height.min(height);
    }
    if node.left.is_none() && node.right.is_none() {
        tree_stats.num_leaves += 1;
    }
    for child in [node.left, node.right].into_iter().flatten() {
        update_tree_stats_recurse(tree, child, tree_stats, height + 1);
    }
}
