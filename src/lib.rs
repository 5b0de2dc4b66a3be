//! An arena-backed Red-Black ordered tree.
//!
//! [`OrderedTree`] keeps a totally ordered set of keys balanced under insertion, giving
//! O(log n) `insert` and `find`. Nodes live in an index arena; parent links are plain indices,
//! so the structure has no reference cycles and no `unsafe`.
//!
//! ```rust
//! use ordtree::{OrderedTree, TreeStatsTrait};
//!
//! let mut tree = OrderedTree::new();
//! for key in [3, 2, 1] {
//!     tree.insert(key);
//! }
//! assert_eq!(*tree.root().unwrap().key(), 2);
//! assert_eq!(tree.get_tree_stats().rotations, 1);
//! assert!(tree.validate().is_ok());
//! ```

pub mod check;
pub mod error;
pub mod iter;
pub mod node;
pub mod options;
pub mod print;
pub mod stats;
pub mod tree;
pub mod utils;

pub use error::InvariantError;
pub use node::{Color, NodeRef, Side};
pub use options::TreeOptions;
pub use stats::{TreeStats, TreeStatsTrait};
pub use tree::OrderedTree;
pub use utils::arena::NodeId;
