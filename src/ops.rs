use crate::{edge::NumEdges, vertex::NumVertices};

/// Provides getters pertaining to the order and size of a graph,
/// and the predicates derived from them
pub trait GraphOrder {
    /// Returns the number of vertices of the graph
    fn order(&self) -> NumVertices;

    /// Returns the number of edges of the graph
    fn size(&self) -> NumEdges;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_null(&self) -> bool {
        self.order() == 0
    }

    /// Returns *true* if the graph consists of a single vertex without edges
    fn is_trivial(&self) -> bool {
        self.order() == 1 && self.size() == 0
    }

    /// Returns *true* if `size == order * (order - 1) / 2`.
    ///
    /// This counts every unordered pair of distinct vertices once and is therefore only meaningful
    /// for loop-free graphs storing each undirected edge in one orientation.
    fn is_complete(&self) -> bool {
        let n = self.order();
        self.size() == n * n.saturating_sub(1) / 2
    }
}

/// Whether the edges of a graph are oriented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GraphKind {
    #[default]
    Undirected,
    Directed,
}

/// Provides the orientation of a graph
pub trait GraphType {
    fn kind(&self) -> GraphKind;

    fn is_directed(&self) -> bool {
        self.kind() == GraphKind::Directed
    }

    fn is_undirected(&self) -> bool {
        self.kind() == GraphKind::Undirected
    }

    /// A graph is either wholly directed or wholly undirected, so this is always *false*
    fn is_partially_directed(&self) -> bool {
        false
    }
}
