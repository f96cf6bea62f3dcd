/*!
# Utilities

Bookkeeping structures the [`DenseGraph`](crate::graph::DenseGraph) is assembled from:
- [`BiMap`]: a pair of hash maps kept in sync, used for the id <-> label overlays,
- [`IndexMap`]: the dense vertex-id <-> matrix-index bijection.

You probably do not need to interact with this module directly.
*/

pub mod bimap;
pub mod index_map;

pub use bimap::BiMap;
pub use index_map::IndexMap;
