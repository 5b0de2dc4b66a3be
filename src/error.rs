use thiserror::Error;

/// A broken structural invariant, as reported by
/// [`OrderedTree::validate`](crate::tree::OrderedTree::validate).
///
/// Keys are carried in their `Debug` rendering so the error does not borrow from the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The root node is colored red
    #[error("Root {key} is red")]
    RedRoot { key: String },

    /// The root node has a parent link
    #[error("Root {key} has a parent link")]
    RootHasParent { key: String },

    /// A child's parent link does not point at the node holding it
    #[error("Parent link of {child} does not point back at {parent}")]
    BrokenParentLink { parent: String, child: String },

    /// A key sits on the wrong side of one of its ancestors
    #[error("Key {key} is out of order with ancestor {bound}")]
    OrderViolation { key: String, bound: String },

    /// A red node has a red child
    #[error("Red node {parent} has red child {child}")]
    RedRedEdge { parent: String, child: String },

    /// The two subtrees of a node contain different numbers of black nodes
    #[error("Black height under {key} differs: left {left}, right {right}")]
    BlackHeightMismatch {
        key: String,
        left: usize,
        right: usize,
    },

    /// The element count does not match the reachable nodes
    #[error("Tree reports {expected} keys but {found} nodes are reachable")]
    SizeMismatch { expected: usize, found: usize },
}
