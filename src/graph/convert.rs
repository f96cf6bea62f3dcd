//! Import from and export to adjacency lists and matrices.

use std::collections::BTreeMap;

use super::*;
use crate::repr::{AdjacencyMatrix, SparseAdjacencyMatrix};

/// Out-neighbourhoods by vertex id
pub type AdjacencyList = BTreeMap<VertexId, VertexIdSet>;

impl DenseGraph {
    /// Builds a graph from an adjacency list.
    ///
    /// The keys must be exactly `0..n` and every neighbour must itself be a key;
    /// otherwise an [`InvalidStructure`](GraphError::InvalidStructure) error is returned.
    ///
    /// # Example
    /// ```
    /// use std::collections::{BTreeMap, BTreeSet};
    /// use densegraph::prelude::*;
    ///
    /// let list: AdjacencyList = BTreeMap::from([
    ///     (0, BTreeSet::from([1])),
    ///     (1, BTreeSet::new()),
    /// ]);
    /// let graph = DenseGraph::from_adjacency_list(&list).unwrap();
    /// assert_eq!(graph.size(), 1);
    /// assert_eq!(graph.to_adjacency_list(), list);
    /// ```
    pub fn from_adjacency_list(list: &AdjacencyList) -> Result<Self> {
        if let Some((expected, &found)) = list
            .keys()
            .enumerate()
            .find(|&(i, &u)| u != i as VertexId)
        {
            debug!("rejected adjacency list: vertex {expected} missing before {found}");
            return Err(GraphError::invalid_structure(format!(
                "vertices must be numbered 0..{}, but vertex {expected} is missing",
                list.len()
            )));
        }

        for (&u, neighbors) in list {
            if let Some(&v) = neighbors.iter().find(|v| !list.contains_key(*v)) {
                debug!("rejected adjacency list: edge ({u}, {v}) leaves the vertex set");
                return Err(GraphError::invalid_structure(format!(
                    "edge ({u}, {v}) references undeclared vertex {v}"
                )));
            }
        }

        let mut graph = Self::with_order(list.len());
        for (&u, neighbors) in list {
            for &v in neighbors {
                graph.store.set(u as Index, v as Index);
            }
        }

        debug!(
            "built graph from adjacency list: order={}, size={}",
            graph.order(),
            graph.size()
        );
        Ok(graph)
    }

    /// Builds a graph on vertices `0..n` from a square `n x n` matrix.
    /// Every non-zero cell becomes an edge.
    pub fn from_adjacency_matrix(matrix: &AdjacencyMatrix) -> Result<Self> {
        ensure_square(matrix.rows(), matrix.cols())?;

        let mut graph = Self::with_order(matrix.rows());
        for (i, j, _) in matrix.nonzeros() {
            graph.store.set(i, j);
        }

        debug!(
            "built graph from dense matrix: order={}, size={}",
            graph.order(),
            graph.size()
        );
        Ok(graph)
    }

    /// Builds a graph on vertices `0..n` from a square `n x n` sparse matrix.
    /// Every stored non-zero entry becomes an edge.
    pub fn from_sparse_matrix(matrix: &SparseAdjacencyMatrix) -> Result<Self> {
        ensure_square(matrix.rows(), matrix.cols())?;

        let mut graph = Self::with_order(matrix.rows());
        for (i, j, _) in matrix.iter() {
            graph.store.set(i, j);
        }

        debug!(
            "built graph from sparse matrix: order={}, size={}",
            graph.order(),
            graph.size()
        );
        Ok(graph)
    }

    /// Returns the out-neighbourhood of every vertex, including vertices without neighbours
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        self.vertices()
            .map(|u| {
                let neighbors = self
                    .neighbors_of(u)
                    .map(|nb| nb.collect::<VertexIdSet>())
                    .unwrap_or_default();
                (u, neighbors)
            })
            .collect()
    }

    /// Returns the `order x order` matrix with `1` for every edge, rows and columns by index
    pub fn to_adjacency_matrix(&self) -> AdjacencyMatrix {
        let n = self.order();
        let mut matrix = AdjacencyMatrix::new(n, n);
        for i in 0..n {
            for j in self.store.out_indices(i) {
                matrix.set(i, j, 1);
            }
        }
        matrix
    }

    /// Same as [`DenseGraph::to_adjacency_matrix`] in sparse layout
    pub fn to_sparse_matrix(&self) -> SparseAdjacencyMatrix {
        SparseAdjacencyMatrix::from(&self.to_adjacency_matrix())
    }
}

fn ensure_square(rows: usize, cols: usize) -> Result<()> {
    if rows != cols {
        debug!("rejected {rows}x{cols} adjacency matrix");
        return Err(GraphError::invalid_structure(format!(
            "adjacency matrix must be square, got {rows}x{cols}"
        )));
    }
    Ok(())
}

impl TryFrom<&AdjacencyList> for DenseGraph {
    type Error = GraphError;

    fn try_from(list: &AdjacencyList) -> Result<Self> {
        Self::from_adjacency_list(list)
    }
}

impl TryFrom<&AdjacencyMatrix> for DenseGraph {
    type Error = GraphError;

    fn try_from(matrix: &AdjacencyMatrix) -> Result<Self> {
        Self::from_adjacency_matrix(matrix)
    }
}

impl TryFrom<&SparseAdjacencyMatrix> for DenseGraph {
    type Error = GraphError;

    fn try_from(matrix: &SparseAdjacencyMatrix) -> Result<Self> {
        Self::from_sparse_matrix(matrix)
    }
}

impl From<&DenseGraph> for AdjacencyList {
    fn from(graph: &DenseGraph) -> Self {
        graph.to_adjacency_list()
    }
}

impl From<&DenseGraph> for AdjacencyMatrix {
    fn from(graph: &DenseGraph) -> Self {
        graph.to_adjacency_matrix()
    }
}

impl From<&DenseGraph> for SparseAdjacencyMatrix {
    fn from(graph: &DenseGraph) -> Self {
        graph.to_sparse_matrix()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use itertools::Itertools;

    use super::*;
    use crate::error::ErrorKind;

    fn list<const N: usize>(entries: [(VertexId, &[VertexId]); N]) -> AdjacencyList {
        entries
            .into_iter()
            .map(|(u, nbs)| (u, nbs.iter().copied().collect::<BTreeSet<_>>()))
            .collect()
    }

    #[test]
    fn adjacency_list_round_trip() {
        let input = list([
            (0, &[0, 1, 3]),
            (1, &[1, 2]),
            (2, &[4]),
            (3, &[]),
            (4, &[0, 2, 3, 4]),
        ]);

        let graph = DenseGraph::try_from(&input).unwrap();
        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 10);
        assert_eq!(AdjacencyList::from(&graph), input);
    }

    #[test]
    fn adjacency_list_with_gap() {
        let input = list([(0, &[0, 2]), (2, &[0])]);
        let err = DenseGraph::from_adjacency_list(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn adjacency_list_with_undeclared_neighbor() {
        let input = list([(0, &[3]), (1, &[0])]);
        assert_eq!(
            DenseGraph::from_adjacency_list(&input),
            Err(GraphError::InvalidStructure(
                "edge (0, 3) references undeclared vertex 3".into()
            ))
        );
    }

    #[test]
    fn empty_adjacency_list() {
        let graph = DenseGraph::from_adjacency_list(&AdjacencyList::new()).unwrap();
        assert!(graph.is_null());
        assert!(graph.to_adjacency_list().is_empty());
    }

    #[test]
    fn adjacency_list_keeps_isolated_vertices() {
        let mut graph = DenseGraph::from_vertices([3, 8]);
        graph.add_edge((8, 3)).unwrap();
        assert_eq!(
            graph.to_adjacency_list(),
            list([(3, &[]), (8, &[3])])
        );
    }

    #[test]
    fn dense_matrix() {
        let matrix = AdjacencyMatrix::from_rows([[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
        let graph = DenseGraph::try_from(&matrix).unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.edges().collect_vec(), vec![EdgeId(0, 1), EdgeId(1, 2)]);
        assert_eq!(AdjacencyMatrix::from(&graph), matrix);
    }

    #[test]
    fn dense_matrix_values_are_normalized() {
        let matrix = AdjacencyMatrix::from_rows([[0, 3], [-1, 0]]).unwrap();
        let graph = DenseGraph::from_adjacency_matrix(&matrix).unwrap();
        assert_eq!(graph.size(), 2);
        assert_eq!(
            graph.to_adjacency_matrix(),
            AdjacencyMatrix::from_rows([[0, 1], [1, 0]]).unwrap()
        );
    }

    #[test]
    fn non_square_matrices() {
        let matrix = AdjacencyMatrix::from_rows([[0, 1, 0], [0, 0, 1]]).unwrap();
        assert_eq!(
            DenseGraph::from_adjacency_matrix(&matrix).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );

        let sparse = SparseAdjacencyMatrix::new(2, 3);
        assert_eq!(
            DenseGraph::from_sparse_matrix(&sparse).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn sparse_matrix() {
        let empty = SparseAdjacencyMatrix::new(1, 1);
        let graph = DenseGraph::try_from(&empty).unwrap();
        assert!(graph.is_trivial());
        assert_eq!(SparseAdjacencyMatrix::from(&graph), empty);

        let sparse =
            SparseAdjacencyMatrix::from_triplets(4, 4, [(3, 0, 1), (0, 3, 1), (2, 2, 5)]).unwrap();
        let graph = DenseGraph::from_sparse_matrix(&sparse).unwrap();
        assert_eq!(
            graph.edges().collect_vec(),
            vec![EdgeId(0, 3), EdgeId(2, 2), EdgeId(3, 0)]
        );
        assert_eq!(graph.to_sparse_matrix().get(2, 2), 1);
        assert_eq!(graph.to_sparse_matrix().nnz(), 3);
    }

    #[test]
    fn matrix_rows_follow_indices() {
        let mut graph = DenseGraph::new();
        graph.add_vertex_with_id(9).unwrap();
        graph.add_vertex_with_id(4).unwrap();
        graph.add_edge((9, 4)).unwrap();

        // row/column 0 is vertex 9
        assert_eq!(
            graph.to_adjacency_matrix(),
            AdjacencyMatrix::from_rows([[0, 1], [0, 0]]).unwrap()
        );
    }
}
