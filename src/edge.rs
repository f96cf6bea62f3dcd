use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
};

use crate::vertex::VertexId;

/// An edge is an ordered pair `(tail, head)` of vertex ids.
/// Self-loops are allowed and `EdgeId(u, v) != EdgeId(v, u)` for `u != v`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub VertexId, pub VertexId);

/// Number of edges of a graph
pub type NumEdges = usize;

/// Ordered set of edge ids
pub type EdgeIdSet = BTreeSet<EdgeId>;

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Debug for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl EdgeId {
    /// Returns the tail (source) of the edge
    pub fn tail(&self) -> VertexId {
        self.0
    }

    /// Returns the head (target) of the edge
    pub fn head(&self) -> VertexId {
        self.1
    }

    /// Normalizes the edge such that the endpoint with smaller id comes first
    pub fn normalized(&self) -> Self {
        EdgeId(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        EdgeId(self.1, self.0)
    }

    /// Returns true if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: VertexId) -> bool {
        self.0 == u || self.1 == u
    }
}

impl From<(VertexId, VertexId)> for EdgeId {
    fn from(value: (VertexId, VertexId)) -> Self {
        EdgeId(value.0, value.1)
    }
}

impl From<&(VertexId, VertexId)> for EdgeId {
    fn from(value: &(VertexId, VertexId)) -> Self {
        EdgeId(value.0, value.1)
    }
}

impl From<&EdgeId> for EdgeId {
    fn from(value: &EdgeId) -> Self {
        *value
    }
}

impl From<EdgeId> for (VertexId, VertexId) {
    fn from(value: EdgeId) -> Self {
        (value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_error_messages() {
        assert_eq!(format!("{}", EdgeId(3, 14)), "(3, 14)");
        assert_eq!(format!("{:?}", EdgeId(0, 0)), "(0, 0)");
    }

    #[test]
    fn orientation_matters() {
        let e = EdgeId(4, 1);
        assert_ne!(e, e.reverse());
        assert_eq!(e.normalized(), EdgeId(1, 4));
        assert_eq!(e.reverse().reverse(), e);
        assert!(!e.is_loop());
        assert!(EdgeId(2, 2).is_loop());
        assert!(e.is_incident_to(1) && e.is_incident_to(4) && !e.is_incident_to(2));
    }

    #[test]
    fn lexicographic_order() {
        let mut edges = vec![EdgeId(1, 0), EdgeId(0, 2), EdgeId(0, 1)];
        edges.sort();
        assert_eq!(edges, vec![EdgeId(0, 1), EdgeId(0, 2), EdgeId(1, 0)]);
    }
}
