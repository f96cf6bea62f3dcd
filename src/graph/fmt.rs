//! Equality, hashing, and textual rendering of [`DenseGraph`].
//!
//! All three look at the same five components: the vertex set, the edge set, the graph label,
//! the vertex labels, and the edge labels. Attributes and the [`GraphKind`] are ignored.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use itertools::Itertools;

use super::*;

/// Order independent snapshot of the compared components
#[derive(Hash)]
pub(crate) struct Canonical<'a> {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
    pub label: Option<&'a str>,
    pub vertex_labels: Vec<(VertexId, &'a str)>,
    pub edge_labels: Vec<(EdgeId, &'a str)>,
}

impl DenseGraph {
    /// Returns all compared components sorted by id
    pub(crate) fn canonical(&self) -> Canonical<'_> {
        Canonical {
            vertices: self.vertices().sorted_unstable().collect(),
            edges: self.edges().sorted_unstable().collect(),
            label: self.labels.graph().ok(),
            vertex_labels: self.vertex_labels().sorted_unstable().collect(),
            edge_labels: self.edge_labels().sorted_unstable().collect(),
        }
    }
}

impl PartialEq for DenseGraph {
    fn eq(&self, other: &Self) -> bool {
        self.order() == other.order()
            && self.size() == other.size()
            && self.vertices().all(|u| other.has_vertex(u))
            && self.edges().all(|e| matches!(other.has_edge(e), Ok(true)))
            && self.labels == other.labels
    }
}

impl Eq for DenseGraph {}

impl Hash for DenseGraph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

/// Renders `(label, (vertices), (edges), (vertex labels), (edge labels))` where every list
/// element is followed by `", "`, e.g.
/// `("G", (0, 1, ), ((0, 1), ), ((0, "a"), ), (((0, 1), "e"), ))`.
/// Vertices and edges appear in index order, a missing graph label renders as nothing.
impl Display for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        if let Ok(label) = self.labels.graph() {
            write!(f, "{label:?}")?;
        }

        write!(f, ", (")?;
        for u in self.vertices() {
            write!(f, "{u}, ")?;
        }

        write!(f, "), (")?;
        for e in self.edges() {
            write!(f, "{e}, ")?;
        }

        write!(f, "), (")?;
        for (u, label) in self.vertex_labels() {
            write!(f, "({u}, {label:?}), ")?;
        }

        write!(f, "), (")?;
        for (e, label) in self.edge_labels() {
            write!(f, "({e}, {label:?}), ")?;
        }

        write!(f, "))")
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use super::*;

    fn hash_of(graph: &DenseGraph) -> u64 {
        let mut hasher = DefaultHasher::new();
        graph.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn display() {
        assert_eq!(DenseGraph::new().to_string(), "(, (), (), (), ())");

        let mut graph = DenseGraph::from_edges([(0, 1), (1, 1)]);
        graph.set_graph_label("G").unwrap();
        graph.set_vertex_label(0, "a").unwrap();
        graph.set_edge_label((0, 1), "e").unwrap();

        assert_eq!(
            graph.to_string(),
            r#"("G", (0, 1, ), ((0, 1), (1, 1), ), ((0, "a"), ), (((0, 1), "e"), ))"#
        );
    }

    #[test]
    fn hash_of_empty_and_grown_graphs() {
        let mut g = DenseGraph::new();
        let mut h = DenseGraph::new();
        assert_eq!(g, h);
        assert_eq!(hash_of(&g), hash_of(&h));

        g.add_vertex();
        assert_ne!(g, h);
        assert_ne!(hash_of(&g), hash_of(&h));

        h.add_vertex();
        assert_eq!(g, h);
        assert_eq!(hash_of(&g), hash_of(&h));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut g = DenseGraph::new();
        g.add_vertex_with_id(2).unwrap();
        g.add_vertex_with_id(1).unwrap();
        g.add_edge((2, 1)).unwrap();
        g.add_edge((1, 2)).unwrap();

        let h = DenseGraph::from_edges([(1, 2), (2, 1)]);

        assert_eq!(g, h);
        assert_eq!(hash_of(&g), hash_of(&h));
        assert_ne!(g.to_string(), h.to_string());
    }

    #[test]
    fn equality_covers_labels_not_attrs() {
        let g = DenseGraph::from_edges([(0, 1)]);
        let mut h = g.clone();

        h.set_vertex_attr(0, "x", true).unwrap();
        h.set_graph_attr("y", 1.5);
        assert_eq!(g, h);

        let h = h.into_directed();
        assert_eq!(g, h);

        let mut h = g.clone();
        h.set_edge_label((0, 1), "e").unwrap();
        assert_ne!(g, h);
        assert_ne!(hash_of(&g), hash_of(&h));

        let mut h = g.clone();
        h.set_graph_label("H").unwrap();
        assert_ne!(g, h);
        assert_ne!(hash_of(&g), hash_of(&h));

        let mut h = g.clone();
        h.del_edge((0, 1)).unwrap();
        h.add_edge((1, 0)).unwrap();
        assert_ne!(g, h);
        assert_ne!(hash_of(&g), hash_of(&h));
    }
}
