//! Tree nodes and the read-only handles callers use to walk them.

use std::fmt;

use crate::tree::OrderedTree;
use crate::utils::arena::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A node as stored in the arena. `parent` is a plain index back into the arena and never owns
/// anything.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, color: Color, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// A borrowed, read-only view of one node in an [`OrderedTree`].
///
/// Handles are obtained from [`OrderedTree::root`] and by following `left`, `right` and `parent`.
/// They cannot change colors or links; that is reserved for the tree's own balancing code.
pub struct NodeRef<'a, K> {
    tree: &'a OrderedTree<K>,
    id: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a OrderedTree<K>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node<K> {
        self.tree.node(self.id)
    }

    fn follow(&self, link: Option<NodeId>) -> Option<NodeRef<'a, K>> {
        link.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.node().is_red()
    }

    pub fn is_black(&self) -> bool {
        !self.node().is_red()
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.follow(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.follow(self.node().right)
    }

    pub fn child(&self, side: Side) -> Option<NodeRef<'a, K>> {
        self.follow(self.node().child(side))
    }

    /// The parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.follow(self.node().parent)
    }

    /// Which side of its parent this node hangs off. `None` for the root.
    pub fn side(&self) -> Option<Side> {
        let parent = self.tree.node(self.node().parent?);
        if parent.left == Some(self.id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
}

impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}
