//! Human-readable dump of a tree's shape, one level per line.

use std::fmt::{self, Display};

use crate::node::{Color, NodeRef, Side};
use crate::tree::OrderedTree;

/// Prints every node as `key(color parent side)`, rows top down, nodes separated by tabs.
///
/// ```rust
/// use ordtree::OrderedTree;
///
/// let tree: OrderedTree<u32> = [3, 2, 1].into_iter().collect();
/// assert_eq!(
///     tree.display_levels().to_string(),
///     "2(B)\n1(R 2 left)\t3(R 2 right)\n"
/// );
/// ```
pub struct LevelPrinter<'a, K> {
    tree: &'a OrderedTree<K>,
}

impl<K: Display> OrderedTree<K> {
    pub fn display_levels(&self) -> LevelPrinter<'_, K> {
        LevelPrinter { tree: self }
    }
}

fn write_node<K: Display>(f: &mut fmt::Formatter<'_>, node: &NodeRef<'_, K>) -> fmt::Result {
    let color = match node.color() {
        Color::Red => "R",
        Color::Black => "B",
    };
    match (node.parent(), node.side()) {
        (Some(parent), Some(side)) => {
            let side = match side {
                Side::Left => "left",
                Side::Right => "right",
            };
            write!(f, "{}({color} {} {side})", node.key(), parent.key())
        }
        _ => write!(f, "{}({color})", node.key()),
    }
}

impl<K: Display> Display for LevelPrinter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tree.levels() {
            for (i, node) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write_node(f, node)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
