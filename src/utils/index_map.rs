/*!
# Index Map

Bijection between caller-visible [`VertexId`]s and the dense matrix indices `0..len`.
The index side is dense, so it is stored as a plain vector (`index -> id`) next to a hash map
(`id -> index`). Removing a vertex shifts every larger index down by one, mirroring the row/column
compaction of the [`AdjacencyStore`](crate::repr::AdjacencyStore).
*/

use fxhash::FxHashMap;

use crate::vertex::*;

#[derive(Debug, Clone, Default)]
pub struct IndexMap {
    ids: Vec<VertexId>,
    indices: FxHashMap<VertexId, Index>,
}

impl IndexMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity map `i <-> i` for all `i < n`
    pub fn identity(n: NumVertices) -> Self {
        Self::from_ids((0..n).map(|i| i as VertexId))
    }

    /// Assigns indices `0..k` to the given ids in iteration order.
    /// ** Panics if an id occurs twice **
    pub fn from_ids<I: IntoIterator<Item = VertexId>>(ids: I) -> Self {
        let mut map = Self::new();
        for id in ids {
            assert!(map.push(id).is_some(), "duplicate vertex id {id}");
        }
        map
    }

    /// Returns the number of mapped vertices
    pub fn len(&self) -> NumVertices {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns *true* if `id` is mapped
    pub fn contains(&self, id: VertexId) -> bool {
        self.indices.contains_key(&id)
    }

    /// Returns the index of `id` if it is mapped
    pub fn index_of(&self, id: VertexId) -> Option<Index> {
        self.indices.get(&id).copied()
    }

    /// Returns the id stored at `index` if `index < len`
    pub fn id_at(&self, index: Index) -> Option<VertexId> {
        self.ids.get(index).copied()
    }

    /// All ids, ordered by index
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    /// Maps `id` to the next free index `len` and returns that index.
    /// Returns `None` (and changes nothing) if `id` is already mapped.
    pub fn push(&mut self, id: VertexId) -> Option<Index> {
        if self.contains(id) {
            return None;
        }

        let index = self.ids.len();
        self.ids.push(id);
        self.indices.insert(id, index);
        Some(index)
    }

    /// Unmaps `id` and returns its former index. Every id with a larger index moves down by one.
    pub fn remove(&mut self, id: VertexId) -> Option<Index> {
        let index = self.indices.remove(&id)?;
        self.ids.remove(index);

        for (shifted, &moved) in self.ids.iter().enumerate().skip(index) {
            self.indices.insert(moved, shifted);
        }

        Some(index)
    }

    /// Returns the smallest non-negative id that is not mapped
    pub fn smallest_unused(&self) -> VertexId {
        // at most `len` ids are taken, so one of `0..=len` is free
        (0..=self.ids.len() as VertexId)
            .find(|id| !self.contains(*id))
            .unwrap_or(self.ids.len() as VertexId)
    }

    /// Reserves storage for `additional` further ids
    pub fn reserve(&mut self, additional: usize) {
        self.ids.reserve(additional);
        self.indices.reserve(additional);
    }
}
