/*!
`densegraph` is a mutable graph container backed by a **dense adjacency matrix**, with optional
**labels** and typed **attributes** on the graph, its vertices, and its edges.

# Representation

**Vertices** are identified by a stable `u64` id. Internally every vertex also has a matrix
*index* in `0..n`; indices are renumbered when a vertex is deleted, ids never are.
**Edges** are identified by the tuple-struct `EdgeId(tail, head)`.

The edges live in an `n x n` byte matrix (see [`repr::AdjacencyStore`]), so edge queries and
updates are constant time, while adding or deleting a vertex rewrites the matrix.

### Directed vs Undirected

Every graph carries a [`GraphKind`](ops::GraphKind) flag. Edges are stored exactly as given in
both cases: an undirected graph does **not** mirror `(u, v)` into `(v, u)`.

### Labels and Attributes

- A **label** is a non-empty string bound to at most one vertex (or edge) at a time, and can be
  used wherever a vertex (or, via [`EdgeLabel`](graph::EdgeLabel), an edge) is expected.
- An **attribute** is a typed value under a string key and can only be read back as the type it
  was stored with (see [`attrs`]).

Deleting a vertex or an edge deletes its labels and attributes as well.

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes ids, errors, graph traits, the graph itself, and the exchange formats,
- [`graph`] includes [`DenseGraph`](graph::DenseGraph) and its vertex/edge keys,
- [`views`] includes the lazy iterators returned by the graph,
- [`repr`] includes the storage, the dense/sparse matrix exchange formats, and digests.

In most use-cases, `use densegraph::prelude::*;` suffices for your needs.

```
use densegraph::prelude::*;

let mut graph = DenseGraph::new();
let a = graph.add_labeled_vertex("a").unwrap();
let b = graph.add_vertex();
graph.add_edge(("a", b)).unwrap();
graph.set_edge_attr((a, b), "weight", 2.5).unwrap();

assert_eq!(graph.edge_attr::<f64>((a, b), "weight"), Ok(2.5));
assert!(graph.edge_attr::<i64>((a, b), "weight").is_err());
assert_eq!(graph.to_string(), r#"(, (0, 1, ), ((0, 1), ), ((0, "a"), ), ())"#);
```
*/

pub mod attrs;
pub mod edge;
pub mod error;
pub mod graph;
pub mod labels;
pub mod ops;
pub mod repr;
pub mod utils;
pub mod vertex;
pub mod views;

pub(crate) mod testing;

pub mod prelude {
    pub use super::{
        edge::*,
        error::*,
        graph::*,
        ops::*,
        repr::{AdjacencyMatrix, SparseAdjacencyMatrix, digest::GraphDigest},
        vertex::*,
    };
}
