/// Construction-time settings for an [`OrderedTree`](crate::tree::OrderedTree).
///
/// ```rust
/// use ordtree::{OrderedTree, TreeOptions};
///
/// let options = TreeOptions::default()
///     .with_override_mode(false)
///     .with_capacity(1024);
/// let tree = OrderedTree::<u64>::with_options(options);
/// assert!(!tree.override_mode());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeOptions {
    /// When set, inserting a key equal to a stored one replaces the stored key. When clear, the
    /// insert is ignored.
    pub override_mode: bool,
    /// Number of nodes to reserve room for up front.
    pub capacity: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            override_mode: true,
            capacity: 0,
        }
    }
}

impl TreeOptions {
    pub fn with_override_mode(mut self, override_mode: bool) -> Self {
        self.override_mode = override_mode;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
