/*!
# Graph Hash Digests

[`GraphDigest`] computes a cryptographic digest over exactly the components that
[`DenseGraph`] equality looks at, so equal graphs always share a digest.

All integers are encoded as little-endian `u64`, strings as their byte length followed by the
UTF-8 bytes. The input to the hash function is
- the order followed by all vertex ids in ascending order,
- the size followed by all edges in ascending order,
- a `0` byte if the graph carries no label, or a `1` byte and the label,
- the number of vertex labels followed by `(id, label)` in ascending id order,
- the number of edge labels followed by `(tail, head, label)` in ascending edge order.

## Example
```
use densegraph::prelude::*;

let mut graph = DenseGraph::with_order(3);
graph.add_edge((0, 1)).unwrap();
graph.add_edge((2, 2)).unwrap();

assert_eq!(
    graph.digest_sha256(),
    "56a97aab49b72bd93deb0b49ba67ef2f76ebf6d7cedf7276b7a5ce2a8d9989fc"
);
```
*/

use std::fmt::LowerHex;

use ::digest::{Digest, Output};

use crate::{edge::EdgeId, graph::DenseGraph};

/// Trait for computing a **canonical hash digest** of a graph.
///
/// The digest does not depend on the order in which vertices or edges were inserted,
/// nor on attributes or the graph kind.
///
/// # Example
/// ```
/// use densegraph::prelude::*;
///
/// let graph = DenseGraph::from_edges([(0, 1), (2, 3)]);
///
/// // Any digest implementing `Digest` can be used
/// let hex = graph.digest::<sha2::Sha512>();
/// assert_eq!(hex.len(), 128);
/// ```
pub trait GraphDigest {
    /// Computes a digest of the graph using the hash function `D`
    /// and returns it as a lower-case hexadecimal string.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph (64 hex characters).
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

fn update_u64<D: Digest>(hasher: &mut D, x: u64) {
    hasher.update(x.to_le_bytes());
}

fn update_str<D: Digest>(hasher: &mut D, s: &str) {
    update_u64(hasher, s.len() as u64);
    hasher.update(s.as_bytes());
}

fn update_edge<D: Digest>(hasher: &mut D, EdgeId(u, v): EdgeId) {
    update_u64(hasher, u);
    update_u64(hasher, v);
}

impl GraphDigest for DenseGraph {
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let canonical = self.canonical();
        let mut hasher = D::new();

        update_u64(&mut hasher, canonical.vertices.len() as u64);
        for &u in &canonical.vertices {
            update_u64(&mut hasher, u);
        }

        update_u64(&mut hasher, canonical.edges.len() as u64);
        for &e in &canonical.edges {
            update_edge(&mut hasher, e);
        }

        match canonical.label {
            Some(label) => {
                hasher.update([1u8]);
                update_str(&mut hasher, label);
            }
            None => hasher.update([0u8]),
        }

        update_u64(&mut hasher, canonical.vertex_labels.len() as u64);
        for &(u, label) in &canonical.vertex_labels {
            update_u64(&mut hasher, u);
            update_str(&mut hasher, label);
        }

        update_u64(&mut hasher, canonical.edge_labels.len() as u64);
        for &(e, label) in &canonical.edge_labels {
            update_edge(&mut hasher, e);
            update_str(&mut hasher, label);
        }

        format!("{:x}", hasher.finalize())
    }
}
