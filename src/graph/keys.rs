/*!
# Vertex and Edge Keys

Every vertex-taking operation of a [`DenseGraph`] accepts anything implementing [`AsVertex`]:
a [`VertexId`] or a vertex label (`&str`, `String`). Likewise, edge-taking operations accept
[`AsEdge`]: an [`EdgeId`], a pair of vertex keys, or the edge's own label wrapped in [`EdgeLabel`].

Resolving an unbound label fails with [`GraphError::LabelNotFound`], which is of the same
[`ErrorKind::NotFound`](crate::error::ErrorKind) as an unknown id.
*/

use super::DenseGraph;
use crate::{
    edge::EdgeId,
    error::{GraphError, Result},
    vertex::VertexId,
};

/// Something that names a vertex
pub trait AsVertex {
    /// *true* if the key is a label rather than an id
    const BY_LABEL: bool = false;

    /// Returns the id of the named vertex; fails if there is no such vertex
    fn locate(&self, graph: &DenseGraph) -> Result<VertexId>;
}

impl AsVertex for VertexId {
    fn locate(&self, graph: &DenseGraph) -> Result<VertexId> {
        if graph.index.contains(*self) {
            Ok(*self)
        } else {
            Err(GraphError::VertexNotFound(*self))
        }
    }
}

impl AsVertex for str {
    const BY_LABEL: bool = true;

    fn locate(&self, graph: &DenseGraph) -> Result<VertexId> {
        graph.labels.vertices.id_of(self)
    }
}

impl AsVertex for String {
    const BY_LABEL: bool = true;

    fn locate(&self, graph: &DenseGraph) -> Result<VertexId> {
        self.as_str().locate(graph)
    }
}

impl<T: AsVertex + ?Sized> AsVertex for &T {
    const BY_LABEL: bool = T::BY_LABEL;

    fn locate(&self, graph: &DenseGraph) -> Result<VertexId> {
        (**self).locate(graph)
    }
}

/// The label of an edge, as opposed to a pair of vertex labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeLabel<'a>(pub &'a str);

/// Something that names an edge
pub trait AsEdge {
    /// *true* if the key is an edge label rather than a pair of endpoints
    const BY_LABEL: bool = false;

    /// Returns the edge with resolved endpoints; fails if either endpoint does not exist.
    /// The edge itself need not exist.
    fn endpoints(&self, graph: &DenseGraph) -> Result<EdgeId>;
}

impl AsEdge for EdgeId {
    fn endpoints(&self, graph: &DenseGraph) -> Result<EdgeId> {
        self.0.locate(graph)?;
        self.1.locate(graph)?;
        Ok(*self)
    }
}

impl<U: AsVertex, V: AsVertex> AsEdge for (U, V) {
    fn endpoints(&self, graph: &DenseGraph) -> Result<EdgeId> {
        Ok(EdgeId(self.0.locate(graph)?, self.1.locate(graph)?))
    }
}

impl AsEdge for EdgeLabel<'_> {
    const BY_LABEL: bool = true;

    fn endpoints(&self, graph: &DenseGraph) -> Result<EdgeId> {
        graph.labels.edges.id_of(self.0)
    }
}

impl<T: AsEdge + ?Sized> AsEdge for &T {
    const BY_LABEL: bool = T::BY_LABEL;

    fn endpoints(&self, graph: &DenseGraph) -> Result<EdgeId> {
        (**self).endpoints(graph)
    }
}
