/*!
# Errors

Every fallible operation of a [`DenseGraph`](crate::graph::DenseGraph) returns a [`GraphError`].
Variants carry the offending id, label, or key so that messages are self-describing.
For programmatic handling, [`GraphError::kind`] collapses the variants into the four
[`ErrorKind`]s callers usually care about.
*/

use thiserror::Error;

use crate::{edge::EdgeId, vertex::VertexId};

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A vertex, edge, label, or attribute key is missing
    NotFound,
    /// A vertex, edge, or label value is already present
    AlreadyExists,
    /// Structurally invalid input (empty label, malformed adjacency, non-square matrix)
    InvalidArgument,
    /// An attribute was requested with a type other than the one stored
    TypeMismatch,
}

/// Canonical error type of this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {0} is not defined")]
    VertexNotFound(VertexId),

    #[error("edge {0} is not defined")]
    EdgeNotFound(EdgeId),

    #[error("vertex {0} is already defined")]
    VertexExists(VertexId),

    #[error("edge {0} is already defined")]
    EdgeExists(EdgeId),

    #[error("graph label is not defined")]
    GraphLabelNotFound,

    #[error("vertex {0} label is not defined")]
    VertexLabelNotFound(VertexId),

    #[error("edge {0} label is not defined")]
    EdgeLabelNotFound(EdgeId),

    /// No id is bound to the label
    #[error("label '{0}' is not defined")]
    LabelNotFound(String),

    #[error("label '{0}' is already defined")]
    DuplicateLabel(String),

    #[error("label cannot be empty")]
    EmptyLabel,

    #[error("key '{0}' is not defined")]
    KeyNotFound(String),

    #[error("attribute '{key}' holds a value of type {stored}, not {requested}")]
    TypeMismatch {
        key: String,
        stored: &'static str,
        requested: &'static str,
    },

    /// Malformed adjacency list or matrix handed to a constructor
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
}

impl GraphError {
    /// Returns the [`ErrorKind`] of this error
    pub fn kind(&self) -> ErrorKind {
        use GraphError::*;
        match self {
            VertexNotFound(_)
            | EdgeNotFound(_)
            | GraphLabelNotFound
            | VertexLabelNotFound(_)
            | EdgeLabelNotFound(_)
            | LabelNotFound(_)
            | KeyNotFound(_) => ErrorKind::NotFound,
            VertexExists(_) | EdgeExists(_) | DuplicateLabel(_) => ErrorKind::AlreadyExists,
            EmptyLabel | InvalidStructure(_) => ErrorKind::InvalidArgument,
            TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::NotFound`
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub(crate) fn invalid_structure(msg: impl Into<String>) -> Self {
        GraphError::InvalidStructure(msg.into())
    }
}

/// Result type used throughout the crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
