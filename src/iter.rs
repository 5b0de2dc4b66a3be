use std::iter::FusedIterator;

use crate::node::NodeRef;
use crate::tree::OrderedTree;
use crate::utils::arena::NodeId;

/// In-order iterator over the keys of an [`OrderedTree`], smallest first.
pub struct Iter<'a, K> {
    tree: &'a OrderedTree<K>,
    // Nodes whose left subtree has been pushed but which have not been yielded yet.
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(tree: &'a OrderedTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.size(),
        };
        iter.push_all_left(tree.root_id());
        iter
    }

    fn push_all_left(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.tree.node(id).left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = tree.node(self.stack.pop()?);
        self.push_all_left(node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// Level-order walk over the nodes of a tree. Each item is one row, left to right.
pub struct Levels<'a, K> {
    row: Vec<NodeRef<'a, K>>,
}

impl<'a, K> Levels<'a, K> {
    pub(crate) fn new(root: Option<NodeRef<'a, K>>) -> Self {
        Self {
            row: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Levels<'a, K> {
    type Item = Vec<NodeRef<'a, K>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row.is_empty() {
            return None;
        }
        let below = self
            .row
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
        Some(std::mem::replace(&mut self.row, below))
    }
}

impl<K> FusedIterator for Levels<'_, K> {}
