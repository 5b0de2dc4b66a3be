use std::ops::{Index, IndexMut};

// We use a u32 here instead of usize under the assumption there simply won't be that many nodes
// and so that we can save some bytes in every link a node carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The raw slot index of this node in its arena.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A place to store (owned) values that are accessed by a stable index. Nodes are never removed
/// once added, so there is no free list and an id stays valid for the life of the arena.
/// A poor man's slot map, really, but cheap to allocate into and to index.
pub struct Arena<V> {
    values: Vec<V>,
}

impl<V> Arena<V> {
    pub fn new() -> Self {
        Self { values: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Store a value built from the id it is about to receive.
    pub fn add<F: FnOnce(NodeId) -> V>(&mut self, f: F) -> NodeId {
        let id = NodeId(
            u32::try_from(self.values.len()).unwrap_or_else(|_| panic!("arena exhausted")),
        );
        self.values.push(f(id));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&V> {
        self.values.get(id.index())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }
}

impl<V> Index<NodeId> for Arena<V> {
    type Output = V;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.values[index.index()]
    }
}

impl<V> IndexMut<NodeId> for Arena<V> {
    fn index_mut(&mut self, index: NodeId) -> &mut Self::Output {
        &mut self.values[index.index()]
    }
}

impl<V> Default for Arena<V> {
    fn default() -> Self {
        Self::new()
    }
}
