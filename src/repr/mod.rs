/*!
# Storage

Low-level building blocks of a [`DenseGraph`](crate::graph::DenseGraph):
- [`AdjacencyStore`]: the square byte matrix holding the edges (by index),
- [`AdjacencyMatrix`] / [`SparseAdjacencyMatrix`]: exchange formats for import and export,
- [`digest`]: representation independent hash digests of a graph.
*/

mod matrix;
mod store;

pub mod digest;

pub use matrix::*;
pub use store::*;
