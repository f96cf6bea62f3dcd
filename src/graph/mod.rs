/*!
# Dense Graph

[`DenseGraph`] composes the four building blocks of this crate:
- an [`IndexMap`] relating vertex ids to matrix indices,
- an [`AdjacencyStore`] holding the edges,
- a [`LabelOverlay`] for graph, vertex, and edge labels,
- an [`AttrOverlay`] for graph, vertex, and edge attributes.

All mutations go through the graph, which keeps the parts consistent: deleting a vertex removes
its row/column, the labels and attributes of the vertex and of all incident edges, and renumbers
the remaining indices. Every fallible operation validates before it mutates, so an `Err` leaves
the graph unchanged.

```
use densegraph::prelude::*;

let mut graph = DenseGraph::with_order(3);
graph.add_edge((0, 1)).unwrap();
graph.set_vertex_label(2, "sink").unwrap();
graph.add_edge((1, "sink")).unwrap();

assert_eq!(graph.size(), 2);
assert_eq!(graph.has_edge(EdgeId(1, 2)), Ok(true));

graph.del_vertex("sink").unwrap();
assert_eq!(graph.order(), 2);
assert_eq!(graph.size(), 1);
```
*/

use log::{debug, trace};

use crate::{
    attrs::AttrOverlay,
    edge::*,
    error::{GraphError, Result},
    labels::LabelOverlay,
    ops::*,
    repr::AdjacencyStore,
    utils::IndexMap,
    vertex::*,
    views::*,
};

mod convert;
mod fmt;
mod keys;
mod overlay;

pub use convert::AdjacencyList;
pub use keys::*;

/// A mutable graph on an adjacency matrix with labels and attributes.
///
/// Edges are stored as given: an undirected graph does not mirror `(u, v)` into `(v, u)`.
/// The [`GraphKind`] only tags the graph.
#[derive(Debug, Clone, Default)]
pub struct DenseGraph {
    pub(crate) kind: GraphKind,
    pub(crate) index: IndexMap,
    pub(crate) store: AdjacencyStore,
    pub(crate) labels: LabelOverlay,
    pub(crate) attrs: AttrOverlay,
}

impl GraphOrder for DenseGraph {
    fn order(&self) -> NumVertices {
        self.index.len()
    }

    fn size(&self) -> NumEdges {
        self.store.number_of_edges()
    }
}

impl GraphType for DenseGraph {
    fn kind(&self) -> GraphKind {
        self.kind
    }
}

impl DenseGraph {
    /// Creates an empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with vertices `0..n` and no edges
    pub fn with_order(n: NumVertices) -> Self {
        Self {
            index: IndexMap::identity(n),
            store: AdjacencyStore::new(n),
            ..Default::default()
        }
    }

    /// Creates an empty graph that can hold `n` vertices without reallocating its matrix
    pub fn with_capacity(n: NumVertices) -> Self {
        let mut graph = Self::new();
        graph.index.reserve(n);
        graph.store = AdjacencyStore::with_capacity(n);
        graph
    }

    /// Sets the [`GraphKind`]
    pub fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    /// Shorthand for `self.with_kind(GraphKind::Directed)`
    pub fn into_directed(self) -> Self {
        self.with_kind(GraphKind::Directed)
    }

    /// Creates a graph on the given vertex ids (duplicates are ignored) without edges.
    /// Indices are assigned in ascending id order.
    pub fn from_vertices<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let ids: VertexIdSet = ids.into_iter().collect();
        Self {
            store: AdjacencyStore::new(ids.len()),
            index: IndexMap::from_ids(ids),
            ..Default::default()
        }
    }

    /// Creates a graph on all endpoints of the given edges (duplicates are ignored).
    /// Indices are assigned in ascending id order.
    ///
    /// # Example
    /// ```
    /// use densegraph::prelude::*;
    ///
    /// let graph = DenseGraph::from_edges([(4, 2), (2, 4), (4, 2)]);
    /// assert_eq!(graph.order(), 2);
    /// assert_eq!(graph.size(), 2);
    /// ```
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeId>,
    {
        let edges: EdgeIdSet = edges.into_iter().map(|e| e.into()).collect();
        let mut graph = Self::from_vertices(edges.iter().flat_map(|e| [e.0, e.1]));

        for e in edges {
            if let Ok((i, j)) = graph.cell_of(e) {
                graph.store.set(i, j);
            }
        }

        debug!(
            "built graph from edges: order={}, size={}",
            graph.order(),
            graph.size()
        );
        graph
    }

    pub(crate) fn index_of(&self, u: VertexId) -> Result<Index> {
        self.index
            .index_of(u)
            .ok_or(GraphError::VertexNotFound(u))
    }

    pub(crate) fn cell_of(&self, e: EdgeId) -> Result<(Index, Index)> {
        Ok((self.index_of(e.0)?, self.index_of(e.1)?))
    }

    /// Returns *true* if the vertex exists. An unbound label is simply absent.
    pub fn has_vertex(&self, u: impl AsVertex) -> bool {
        u.locate(self).is_ok()
    }

    /// Returns the id of the vertex carrying `label`
    pub fn vertex_id(&self, label: &str) -> Result<VertexId> {
        self.labels.vertices.id_of(label)
    }

    /// Appends vertex `id` as the last row/column
    fn push_vertex(&mut self, id: VertexId) -> Result<Index> {
        let index = self.index.push(id).ok_or(GraphError::VertexExists(id))?;
        let grown = self.store.grow();
        debug_assert_eq!(index, grown);
        trace!("add vertex {id} at index {index}");
        Ok(index)
    }

    /// Adds a vertex with the smallest unused id and returns that id
    ///
    /// # Example
    /// ```
    /// use densegraph::prelude::*;
    ///
    /// let mut graph = DenseGraph::from_vertices([0, 1, 3]);
    /// assert_eq!(graph.add_vertex(), 2);
    /// assert_eq!(graph.add_vertex(), 4);
    /// ```
    pub fn add_vertex(&mut self) -> VertexId {
        let id = self.index.smallest_unused();
        self.index.push(id);
        self.store.grow();
        trace!("add vertex {id}");
        id
    }

    /// Adds vertex `id`; fails if it already exists
    pub fn add_vertex_with_id(&mut self, id: VertexId) -> Result<VertexId> {
        self.push_vertex(id)?;
        Ok(id)
    }

    /// Adds a vertex with the smallest unused id, labels it, and returns the id.
    /// Fails (without adding anything) if the label is empty or already in use.
    pub fn add_labeled_vertex(&mut self, label: &str) -> Result<VertexId> {
        let id = self.index.smallest_unused();
        self.labels.vertices.ensure_assignable(id, label)?;
        self.push_vertex(id)?;
        self.labels.vertices.set(id, label)?;
        Ok(id)
    }

    /// Removes a vertex together with its incident edges, its label, its attributes, and the
    /// labels and attributes of its incident edges. Returns the id of the removed vertex.
    pub fn del_vertex(&mut self, u: impl AsVertex) -> Result<VertexId> {
        let id = u.locate(self)?;
        let index = self.index_of(id)?;

        self.labels.vertices.forget(id);
        self.attrs.vertices.forget(id);
        self.labels.edges.forget_if(|e| e.is_incident_to(id));
        self.attrs.edges.forget_if(|e| e.is_incident_to(id));

        let dropped = self.store.remove(index);
        self.index.remove(id);

        trace!("delete vertex {id} at index {index} with {dropped} incident edges");
        Ok(id)
    }

    /// Returns whether the edge exists; fails if an endpoint does not exist.
    /// An unbound [`EdgeLabel`] yields `Ok(false)`.
    pub fn has_edge<E: AsEdge>(&self, e: E) -> Result<bool> {
        if E::BY_LABEL {
            return Ok(e.endpoints(self).is_ok());
        }

        let (i, j) = self.cell_of(e.endpoints(self)?)?;
        Ok(self.store.get(i, j))
    }

    /// Adds an edge between two existing vertices; fails if the edge already exists
    pub fn add_edge(&mut self, e: impl AsEdge) -> Result<EdgeId> {
        let id = e.endpoints(self)?;
        let (i, j) = self.cell_of(id)?;

        if self.store.set(i, j) {
            return Err(GraphError::EdgeExists(id));
        }

        trace!("add edge {id}");
        Ok(id)
    }

    /// Removes an edge together with its label and attributes
    pub fn del_edge(&mut self, e: impl AsEdge) -> Result<EdgeId> {
        let id = e.endpoints(self)?;
        let (i, j) = self.cell_of(id)?;

        if !self.store.clear(i, j) {
            return Err(GraphError::EdgeNotFound(id));
        }
        self.labels.edges.forget(id);
        self.attrs.edges.forget(id);

        trace!("delete edge {id}");
        Ok(id)
    }

    /// Resolves an edge key to an existing edge
    pub(crate) fn locate_edge(&self, e: impl AsEdge) -> Result<EdgeId> {
        let id = e.endpoints(self)?;
        let (i, j) = self.cell_of(id)?;
        if self.store.get(i, j) {
            Ok(id)
        } else {
            Err(GraphError::EdgeNotFound(id))
        }
    }

    /// Returns the id of the edge carrying `label`
    pub fn edge_id(&self, label: &str) -> Result<EdgeId> {
        self.labels.edges.id_of(label)
    }

    /// Iterates over all `v` with an edge `(u, v)`, ascending by index
    pub fn neighbors_of(&self, u: impl AsVertex) -> Result<impl Iterator<Item = VertexId> + '_> {
        let i = self.index_of(u.locate(self)?)?;
        Ok(self
            .store
            .out_indices(i)
            .filter_map(move |j| self.index.id_at(j)))
    }

    /// Iterates over all `v` with an edge `(v, u)`, ascending by index
    pub fn in_neighbors_of(
        &self,
        u: impl AsVertex,
    ) -> Result<impl Iterator<Item = VertexId> + '_> {
        let j = self.index_of(u.locate(self)?)?;
        Ok(self
            .store
            .in_indices(j)
            .filter_map(move |i| self.index.id_at(i)))
    }

    /// Iterates over all vertices sharing an edge with `u` in either orientation,
    /// ascending by index. Includes `u` itself if it has a self-loop.
    pub fn adjacent(&self, u: impl AsVertex) -> Result<impl Iterator<Item = VertexId> + '_> {
        let k = self.index_of(u.locate(self)?)?;
        Ok((0..self.order())
            .filter(move |&x| self.store.get(k, x) || self.store.get(x, k))
            .filter_map(move |x| self.index.id_at(x)))
    }

    /// Number of stored edges incident to `u`, where a self-loop counts twice
    pub fn degree_of(&self, u: impl AsVertex) -> Result<NumVertices> {
        let k = self.index_of(u.locate(self)?)?;
        Ok(self.store.out_indices(k).count() + self.store.in_indices(k).count())
    }

    /// Lazy view over all vertex ids by ascending index
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices::new(&self.index)
    }

    /// Lazy view over all edges in row-major order
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(&self.store, &self.index)
    }

    /// Lazy view over all `(vertex, label)` pairs by ascending index
    pub fn vertex_labels(&self) -> VertexLabels<'_> {
        VertexLabels::new(self.vertices(), &self.labels.vertices)
    }

    /// Lazy view over all `(edge, label)` pairs in row-major order
    pub fn edge_labels(&self) -> EdgeLabels<'_> {
        EdgeLabels::new(self.edges(), &self.labels.edges)
    }

    /// Read-only access to the label overlay
    pub fn labels(&self) -> &LabelOverlay {
        &self.labels
    }

    /// Read-only access to the attribute overlay
    pub fn attrs(&self) -> &AttrOverlay {
        &self.attrs
    }
}

#[cfg(test)]
use crate::testing::test_graph_ops;

#[cfg(test)]
test_graph_ops!(test_undirected_ops, GraphKind::Undirected);

#[cfg(test)]
test_graph_ops!(test_directed_ops, GraphKind::Directed);
