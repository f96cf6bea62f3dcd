//! Label and attribute operations of [`DenseGraph`].
//!
//! Vertex and edge variants first check that the vertex/edge exists and only then look at the
//! overlay, so a missing owner is reported as [`GraphError::VertexNotFound`] /
//! [`GraphError::EdgeNotFound`] rather than as a missing label or key.

use super::*;
use crate::attrs::{AttrType, AttrValue, get_typed};

/// Graph label
impl DenseGraph {
    pub fn has_graph_label(&self) -> bool {
        self.labels.has_graph()
    }

    pub fn graph_label(&self) -> Result<&str> {
        self.labels.graph()
    }

    /// Sets or replaces the graph label; fails if `label` is empty
    pub fn set_graph_label(&mut self, label: &str) -> Result<()> {
        self.labels.set_graph(label)
    }

    /// Removes and returns the graph label
    pub fn del_graph_label(&mut self) -> Result<String> {
        self.labels.remove_graph()
    }
}

/// Vertex labels
impl DenseGraph {
    /// Returns whether the vertex carries a label; fails if the vertex does not exist.
    /// A label key answers whether the label is bound.
    pub fn has_vertex_label<V: AsVertex>(&self, u: V) -> Result<bool> {
        if V::BY_LABEL {
            return Ok(u.locate(self).is_ok());
        }
        let id = u.locate(self)?;
        Ok(self.labels.vertices.has(id))
    }

    pub fn vertex_label(&self, u: impl AsVertex) -> Result<&str> {
        let id = u.locate(self)?;
        self.labels.vertices.get(id)
    }

    /// Sets or replaces the label of a vertex.
    /// Fails if `label` is empty or already carried by another vertex.
    pub fn set_vertex_label(&mut self, u: impl AsVertex, label: &str) -> Result<()> {
        let id = u.locate(self)?;
        self.labels.vertices.set(id, label)
    }

    pub fn del_vertex_label(&mut self, u: impl AsVertex) -> Result<String> {
        let id = u.locate(self)?;
        self.labels.vertices.remove(id)
    }
}

/// Edge labels
impl DenseGraph {
    /// Returns whether the edge carries a label; fails if the edge does not exist.
    /// An [`EdgeLabel`] key answers whether the label is bound.
    pub fn has_edge_label<E: AsEdge>(&self, e: E) -> Result<bool> {
        if E::BY_LABEL {
            return Ok(e.endpoints(self).is_ok());
        }
        let id = self.locate_edge(e)?;
        Ok(self.labels.edges.has(id))
    }

    pub fn edge_label(&self, e: impl AsEdge) -> Result<&str> {
        let id = self.locate_edge(e)?;
        self.labels.edges.get(id)
    }

    /// Sets or replaces the label of an edge.
    /// Fails if `label` is empty or already carried by another edge.
    pub fn set_edge_label(&mut self, e: impl AsEdge, label: &str) -> Result<()> {
        let id = self.locate_edge(e)?;
        self.labels.edges.set(id, label)
    }

    pub fn del_edge_label(&mut self, e: impl AsEdge) -> Result<String> {
        let id = self.locate_edge(e)?;
        self.labels.edges.remove(id)
    }
}

/// Graph attributes
impl DenseGraph {
    pub fn has_graph_attr(&self, key: &str) -> bool {
        self.attrs.graph.contains_key(key)
    }

    /// Reads an attribute as exactly the type it was stored as
    pub fn graph_attr<T: AttrType>(&self, key: &str) -> Result<T> {
        get_typed(Some(&self.attrs.graph), key)
    }

    /// Sets or overwrites an attribute
    pub fn set_graph_attr(&mut self, key: &str, value: impl Into<AttrValue>) {
        self.attrs.graph.insert(key.to_string(), value.into());
    }

    pub fn del_graph_attr(&mut self, key: &str) -> Result<AttrValue> {
        self.attrs
            .graph
            .remove(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.to_string()))
    }
}

/// Vertex attributes
impl DenseGraph {
    pub fn has_vertex_attr(&self, u: impl AsVertex, key: &str) -> Result<bool> {
        let id = u.locate(self)?;
        Ok(self.attrs.vertices.has(id, key))
    }

    /// Reads an attribute as exactly the type it was stored as
    pub fn vertex_attr<T: AttrType>(&self, u: impl AsVertex, key: &str) -> Result<T> {
        let id = u.locate(self)?;
        self.attrs.vertices.get(id, key)
    }

    /// Sets or overwrites an attribute
    pub fn set_vertex_attr(
        &mut self,
        u: impl AsVertex,
        key: &str,
        value: impl Into<AttrValue>,
    ) -> Result<()> {
        let id = u.locate(self)?;
        self.attrs.vertices.set(id, key, value.into());
        Ok(())
    }

    pub fn del_vertex_attr(&mut self, u: impl AsVertex, key: &str) -> Result<AttrValue> {
        let id = u.locate(self)?;
        self.attrs.vertices.remove(id, key)
    }
}

/// Edge attributes
impl DenseGraph {
    pub fn has_edge_attr(&self, e: impl AsEdge, key: &str) -> Result<bool> {
        let id = self.locate_edge(e)?;
        Ok(self.attrs.edges.has(id, key))
    }

    /// Reads an attribute as exactly the type it was stored as
    pub fn edge_attr<T: AttrType>(&self, e: impl AsEdge, key: &str) -> Result<T> {
        let id = self.locate_edge(e)?;
        self.attrs.edges.get(id, key)
    }

    /// Sets or overwrites an attribute
    pub fn set_edge_attr(
        &mut self,
        e: impl AsEdge,
        key: &str,
        value: impl Into<AttrValue>,
    ) -> Result<()> {
        let id = self.locate_edge(e)?;
        self.attrs.edges.set(id, key, value.into());
        Ok(())
    }

    pub fn del_edge_attr(&mut self, e: impl AsEdge, key: &str) -> Result<AttrValue> {
        let id = self.locate_edge(e)?;
        self.attrs.edges.remove(id, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn graph() -> DenseGraph {
        DenseGraph::from_edges([(0, 1), (1, 2), (2, 2)])
    }

    #[test]
    fn graph_label() {
        let mut graph = graph();
        assert!(!graph.has_graph_label());
        assert_eq!(graph.graph_label(), Err(GraphError::GraphLabelNotFound));
        assert_eq!(graph.set_graph_label(""), Err(GraphError::EmptyLabel));

        graph.set_graph_label("G").unwrap();
        assert_eq!(graph.graph_label(), Ok("G"));
        assert_eq!(graph.del_graph_label(), Ok("G".to_string()));
        assert_eq!(
            graph.del_graph_label().unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn vertex_labels() {
        let mut graph = graph();
        assert_eq!(graph.has_vertex_label(0), Ok(false));
        assert_eq!(graph.has_vertex_label(3), Err(GraphError::VertexNotFound(3)));
        assert_eq!(graph.has_vertex_label("0"), Ok(false));
        assert_eq!(
            graph.vertex_label(0),
            Err(GraphError::VertexLabelNotFound(0))
        );

        graph.set_vertex_label(0, "0").unwrap();
        assert_eq!(graph.has_vertex_label("0"), Ok(true));
        assert_eq!(graph.has_vertex_label(0), Ok(true));
        assert_eq!(graph.vertex_label("0"), Ok("0"));

        assert_eq!(
            graph.set_vertex_label(1, "0").unwrap_err().kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            graph.set_vertex_label(1, "").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            graph.set_vertex_label(9, "nine").unwrap_err().kind(),
            ErrorKind::NotFound
        );

        // relabel through the old label
        graph.set_vertex_label("0", "zero").unwrap();
        assert_eq!(graph.vertex_id("zero"), Ok(0));
        assert_eq!(graph.vertex_id("0").unwrap_err().kind(), ErrorKind::NotFound);

        assert_eq!(graph.del_vertex_label("zero"), Ok("zero".to_string()));
        assert_eq!(
            graph.del_vertex_label(0),
            Err(GraphError::VertexLabelNotFound(0))
        );
    }

    #[test]
    fn label_replace_is_idempotent() {
        let mut graph = graph();
        graph.set_vertex_label(1, "x").unwrap();
        graph.set_edge_label((1, 2), "y").unwrap();
        let before = graph.clone();

        graph.set_vertex_label(1, "x").unwrap();
        graph.set_edge_label((1, 2), "y").unwrap();
        assert_eq!(graph, before);
        assert_eq!(graph.to_string(), before.to_string());
    }

    #[test]
    fn edge_labels() {
        let mut graph = graph();
        assert_eq!(graph.has_edge_label((0, 1)), Ok(false));
        assert_eq!(
            graph.has_edge_label((1, 0)),
            Err(GraphError::EdgeNotFound(EdgeId(1, 0)))
        );
        assert_eq!(
            graph.has_edge_label((0, 5)),
            Err(GraphError::VertexNotFound(5))
        );
        assert_eq!(graph.has_edge_label(EdgeLabel("loop")), Ok(false));

        graph.set_edge_label((2, 2), "loop").unwrap();
        assert_eq!(graph.has_edge_label(EdgeLabel("loop")), Ok(true));
        assert_eq!(graph.edge_label((2, 2)), Ok("loop"));
        assert_eq!(graph.edge_id("loop"), Ok(EdgeId(2, 2)));

        assert_eq!(
            graph.set_edge_label((0, 1), "loop").unwrap_err().kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            graph.set_edge_label((1, 0), "back").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            graph.edge_label((0, 1)),
            Err(GraphError::EdgeLabelNotFound(EdgeId(0, 1)))
        );

        assert_eq!(graph.del_edge_label(EdgeLabel("loop")), Ok("loop".into()));
        assert!(graph.del_edge_label((2, 2)).is_err());
        assert_eq!(graph.edge_id("loop").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn vertex_and_edge_labels_are_separate() {
        let mut graph = graph();
        graph.set_vertex_label(0, "same").unwrap();
        graph.set_edge_label((0, 1), "same").unwrap();
        assert_eq!(graph.vertex_id("same"), Ok(0));
        assert_eq!(graph.edge_id("same"), Ok(EdgeId(0, 1)));
    }

    #[test]
    fn graph_attrs() {
        let mut graph = graph();
        assert!(!graph.has_graph_attr("name"));

        graph.set_graph_attr("name", "test");
        graph.set_graph_attr("weighted", false);
        assert!(graph.has_graph_attr("name"));
        assert_eq!(graph.graph_attr::<String>("name"), Ok("test".to_string()));
        assert_eq!(graph.graph_attr::<bool>("weighted"), Ok(false));
        assert_eq!(
            graph.graph_attr::<u64>("weighted").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );

        assert_eq!(graph.del_graph_attr("weighted"), Ok(AttrValue::Bool(false)));
        assert_eq!(
            graph.del_graph_attr("weighted"),
            Err(GraphError::KeyNotFound("weighted".into()))
        );
    }

    #[test]
    fn vertex_attrs() {
        let mut graph = graph();
        graph.set_vertex_label(2, "c").unwrap();

        assert_eq!(graph.has_vertex_attr(0, "k"), Ok(false));
        assert_eq!(
            graph.has_vertex_attr(5, "k"),
            Err(GraphError::VertexNotFound(5))
        );

        graph.set_vertex_attr("c", "k", true).unwrap();
        assert_eq!(graph.vertex_attr::<bool>(2, "k"), Ok(true));
        assert_eq!(graph.vertex_attr::<bool>("c", "k"), Ok(true));
        assert_eq!(
            graph.vertex_attr::<f64>("c", "k").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            graph.vertex_attr::<bool>(0, "k").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            graph.set_vertex_attr(5, "k", true).unwrap_err().kind(),
            ErrorKind::NotFound
        );

        // overwrite with another type
        graph.set_vertex_attr(2, "k", -1i64).unwrap();
        assert_eq!(graph.vertex_attr::<i64>(2, "k"), Ok(-1));

        assert_eq!(graph.del_vertex_attr(2, "k"), Ok(AttrValue::Int(-1)));
        assert_eq!(
            graph.del_vertex_attr(2, "k"),
            Err(GraphError::KeyNotFound("k".into()))
        );
    }

    #[test]
    fn edge_attrs() {
        let mut graph = graph();

        assert_eq!(
            graph.set_edge_attr((1, 0), "w", 1.0).unwrap_err(),
            GraphError::EdgeNotFound(EdgeId(1, 0))
        );
        graph.set_edge_attr((0, 1), "w", 1.0).unwrap();
        graph.set_edge_attr((0, 1), "tag", vec![1u8, 2, 3]).unwrap();

        assert_eq!(graph.has_edge_attr((0, 1), "w"), Ok(true));
        assert_eq!(graph.has_edge_attr((1, 2), "w"), Ok(false));
        assert_eq!(graph.edge_attr::<f64>((0, 1), "w"), Ok(1.0));
        assert_eq!(graph.edge_attr::<Vec<u8>>((0, 1), "tag"), Ok(vec![1, 2, 3]));

        graph.set_edge_label((0, 1), "a").unwrap();
        assert_eq!(graph.edge_attr::<f64>(EdgeLabel("a"), "w"), Ok(1.0));
        assert_eq!(
            graph.has_edge_attr(EdgeLabel("b"), "w").unwrap_err().kind(),
            ErrorKind::NotFound
        );

        assert_eq!(graph.del_edge_attr((0, 1), "w"), Ok(AttrValue::Float(1.0)));
        assert!(graph.del_edge_attr((0, 1), "w").is_err());
        assert!(graph.del_edge_attr((1, 0), "tag").is_err());
    }
}
