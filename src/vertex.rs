/*!
# Vertex Representation

Vertices are identified by a caller-visible `VertexId = u64`. Internally each vertex
additionally occupies a row/column of the adjacency matrix, its [`Index`]; the two are
related by the [`IndexMap`](crate::utils::IndexMap) and are **not** required to coincide.
*/

use std::collections::BTreeSet;

/// Caller-visible vertex identifier: any unsigned integer
pub type VertexId = u64;

/// Internal row/column of a vertex in the adjacency matrix; always in `0..order`
pub type Index = usize;

/// Number of vertices of a graph
pub type NumVertices = usize;

/// Ordered set of vertex ids
pub type VertexIdSet = BTreeSet<VertexId>;
