//! Red-Black ordered tree.
//!
//! This module contains the main [`OrderedTree`] implementation: the insertion engine, the
//! fixup engine that restores the coloring rules after an insert, and the two rotation
//! primitives that every rebalancing step is built from.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::iter::{Iter, Levels};
use crate::node::{Color, Node, NodeRef, Side};
use crate::options::TreeOptions;
use crate::utils::arena::{Arena, NodeId};

/// Where a freshly attached red node sits relative to its grandparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

impl Shape {
    fn parent_side(self) -> Side {
        match self {
            Shape::LeftLeft | Shape::LeftRight => Side::Left,
            Shape::RightLeft | Shape::RightRight => Side::Right,
        }
    }

    fn is_outer(self) -> bool {
        matches!(self, Shape::LeftLeft | Shape::RightRight)
    }
}

/// One step of insert fixup, chosen from the uncle's color and the two sides on the path from
/// the grandparent down to the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FixupCase {
    /// Uncle is red: push the red up two levels and continue from the grandparent.
    Recolor { uncle: NodeId },
    /// Uncle is black or absent: one or two rotations settle it.
    Rotate(Shape),
}

impl FixupCase {
    fn classify(red_uncle: Option<NodeId>, parent_side: Side, node_side: Side) -> Self {
        match (red_uncle, parent_side, node_side) {
            (Some(uncle), _, _) => FixupCase::Recolor { uncle },
            (None, Side::Left, Side::Left) => FixupCase::Rotate(Shape::LeftLeft),
            (None, Side::Left, Side::Right) => FixupCase::Rotate(Shape::LeftRight),
            (None, Side::Right, Side::Left) => FixupCase::Rotate(Shape::RightLeft),
            (None, Side::Right, Side::Right) => FixupCase::Rotate(Shape::RightRight),
        }
    }
}

/// A self-balancing ordered set of keys, kept as a Red-Black tree.
///
/// All nodes live in an arena and refer to each other by [`NodeId`]; the parent link is just an
/// index, so there is no ownership cycle.
///
/// After every insert the tree satisfies:
///
/// - keys are in binary-search-tree order, with no two equal keys stored;
/// - the root is black and has no parent;
/// - no red node has a red child;
/// - every path from a node down to a missing child passes the same number of black nodes.
///
/// Together these bound the height by `2 * log2(n + 1)`, so `insert` and `find` are O(log n).
///
/// ## Duplicate keys
///
/// Inserting a key equal to a stored one never adds a node. In override mode (the default) the
/// stored key is replaced and the old one handed back; otherwise the tree is left alone and a
/// copy of the stored key is returned.
///
/// ```rust
/// use ordtree::OrderedTree;
///
/// let mut tree = OrderedTree::new();
/// for key in [20, 10, 5, 30, 40, 57, 3, 2] {
///     assert_eq!(tree.insert(key), None);
/// }
/// assert_eq!(tree.insert(40), Some(40));
/// assert_eq!(tree.size(), 8);
/// assert_eq!(tree.find(&57), Some(&57));
/// assert_eq!(tree.find(&58), None);
///
/// let keys: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(keys, vec![2, 3, 5, 10, 20, 30, 40, 57]);
/// ```
///
/// The structure is single-threaded. To share one between threads, put the whole tree behind a
/// single lock; rotations touch several nodes at once and nothing finer-grained is safe.
pub struct OrderedTree<K> {
    nodes: Arena<Node<K>>,
    root: Option<NodeId>,
    len: usize,
    options: TreeOptions,
    rotations: u64,
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> OrderedTree<K> {
    /// Create a new empty tree in override mode.
    pub fn new() -> Self {
        Self::with_options(TreeOptions::default())
    }

    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            nodes: Arena::with_capacity(options.capacity),
            root: None,
            len: 0,
            options,
            rotations: 0,
        }
    }

    pub fn with_override_mode(override_mode: bool) -> Self {
        Self::with_options(TreeOptions::default().with_override_mode(override_mode))
    }

    /// Number of distinct keys stored.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn override_mode(&self) -> bool {
        self.options.override_mode
    }

    /// Switch the duplicate policy for subsequent inserts. Keys already stored are unaffected.
    pub fn set_override_mode(&mut self, override_mode: bool) {
        self.options.override_mode = override_mode;
    }

    /// Read-only handle on the root node, for walking the structure from outside.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Total number of rotations performed since the tree was created.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Look up the stored key equal to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            cursor = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Walk the tree one level at a time, top down, left to right.
    pub fn levels(&self) -> Levels<'_, K> {
        Levels::new(self.root())
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id]
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id]
    }
}

impl<K: Ord> OrderedTree<K> {
    /// Insert a key.
    ///
    /// # Returns
    ///
    /// - `None` if the key was not present and a node was added
    /// - `Some(previous)` if an equal key was stored and override mode replaced it
    /// - `Some(existing)`, a copy of the stored key, if override mode is off; nothing changes
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_override_mode(false);
    /// assert_eq!(tree.insert("apple"), None);
    /// assert_eq!(tree.insert("apple"), Some("apple"));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Option<K>
    where
        K: Clone,
    {
        let Some(mut cursor) = self.root else {
            let root = self.nodes.add(|_| Node::new(key, Color::Black, None));
            self.root = Some(root);
            self.len += 1;
            return None;
        };

        let side = loop {
            let side = match key.cmp(&self.nodes[cursor].key) {
                Ordering::Equal => return Some(self.resolve_duplicate(cursor, key)),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match self.nodes[cursor].child(side) {
                Some(child) => cursor = child,
                None => break side,
            }
        };

        let node = self
            .nodes
            .add(|_| Node::new(key, Color::Red, Some(cursor)));
        self.nodes[cursor].set_child(side, Some(node));
        self.len += 1;
        self.fixup(node);
        None
    }

    fn resolve_duplicate(&mut self, existing: NodeId, key: K) -> K
    where
        K: Clone,
    {
        let stored = &mut self.nodes[existing].key;
        if self.options.override_mode {
            std::mem::replace(stored, key)
        } else {
            stored.clone()
        }
    }
}

// Balancing internals
impl<K> OrderedTree<K> {
    /// Restore the coloring rules after `inserted` was attached as a red leaf.
    fn fixup(&mut self, inserted: NodeId) {
        let mut node = inserted;
        while let Some(parent) = self.red_parent(node) {
            // A red parent is never the root, so it always has a parent of its own.
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };
            let parent_side = self.side_of(parent, grandparent);
            let node_side = self.side_of(node, parent);
            let red_uncle = self.nodes[grandparent]
                .child(parent_side.opposite())
                .filter(|uncle| self.nodes[*uncle].is_red());

            let case = FixupCase::classify(red_uncle, parent_side, node_side);
            trace!("fixup at {node:?}: {case:?}");
            match case {
                FixupCase::Recolor { uncle } => {
                    self.nodes[parent].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    node = grandparent;
                }
                FixupCase::Rotate(shape) => {
                    let parent_side = shape.parent_side();
                    let subtree_root = if shape.is_outer() {
                        parent
                    } else {
                        self.rotate_toward(parent, parent_side);
                        node
                    };
                    self.rotate_toward(grandparent, parent_side.opposite());
                    self.nodes[subtree_root].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    break;
                }
            }
        }

        if let Some(root) = self.root {
            let root = &mut self.nodes[root];
            root.color = Color::Black;
            root.parent = None;
        }
    }

    fn red_parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node]
            .parent
            .filter(|parent| self.nodes[*parent].is_red())
    }

    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        let parent = &self.nodes[parent];
        if parent.left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(parent.right, Some(child));
            Side::Right
        }
    }

    fn rotate_toward(&mut self, node: NodeId, direction: Side) {
        match direction {
            Side::Left => self.rotate_left(node),
            Side::Right => self.rotate_right(node),
        }
    }

    /// Promote the right child of `node` into its place. Panics if there is no right child.
    fn rotate_left(&mut self, node: NodeId) {
        self.rotate(node, Side::Left)
    }

    /// Promote the left child of `node` into its place. Panics if there is no left child.
    fn rotate_right(&mut self, node: NodeId) {
        self.rotate(node, Side::Right)
    }

    /// `node` moves down on the `direction` side of the child coming up from the other side.
    /// Colors are left alone.
    fn rotate(&mut self, node: NodeId, direction: Side) {
        let from = direction.opposite();
        let Some(promoted) = self.nodes[node].child(from) else {
            panic!("cannot rotate {direction:?} around {node:?}: no {from:?} child to promote");
        };
        let former_parent = self.nodes[node].parent;
        let slot = former_parent.map(|parent| (parent, self.side_of(node, parent)));

        // The promoted node's inner subtree moves across to `node`.
        let inner = self.nodes[promoted].child(direction);
        self.nodes[node].set_child(from, inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }

        self.nodes[promoted].set_child(direction, Some(node));
        self.nodes[node].parent = Some(promoted);

        self.nodes[promoted].parent = former_parent;
        match slot {
            Some((parent, side)) => self.nodes[parent].set_child(side, Some(promoted)),
            None => {
                debug!("rotation made {promoted:?} the root");
                self.root = Some(promoted);
            }
        }

        self.rotations += 1;
        trace!("rotated {direction:?} around {node:?}, promoted {promoted:?}");
    }
}

impl<K: Ord + Clone> FromIterator<K> for OrderedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord + Clone> Extend<K> for OrderedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug> fmt::Debug for OrderedTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
