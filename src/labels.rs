/*!
# Label Overlay

Labels are an optional, secondary naming scheme on top of vertex and edge ids.
A label is never empty, and a label value is bound to at most one id of its kind at a time.
Vertex labels and edge labels live in separate namespaces; the graph itself may carry one label.
*/

use std::{fmt::Display, hash::Hash};

use log::trace;

use crate::{
    edge::EdgeId,
    error::{GraphError, Result},
    utils::BiMap,
    vertex::VertexId,
};

/// Ids that can carry a label
pub trait Labelled: Copy + Eq + Hash + Display {
    /// Error raised when the label of `self` is requested but not set
    fn missing_label(self) -> GraphError;
}

impl Labelled for VertexId {
    fn missing_label(self) -> GraphError {
        GraphError::VertexLabelNotFound(self)
    }
}

impl Labelled for EdgeId {
    fn missing_label(self) -> GraphError {
        GraphError::EdgeLabelNotFound(self)
    }
}

/// Fails if `label` cannot be used as a label at all
pub fn validate_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(GraphError::EmptyLabel);
    }
    Ok(())
}

/// Unique id <-> label bindings for one kind of id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap<I: Hash + Eq> {
    map: BiMap<I, String>,
}

impl<I: Hash + Eq> Default for LabelMap<I> {
    fn default() -> Self {
        Self {
            map: BiMap::default(),
        }
    }
}

impl<I: Labelled> LabelMap<I> {
    /// Returns the number of labelled ids
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns *true* if `id` carries a label
    pub fn has(&self, id: I) -> bool {
        self.map.contains_left(&id)
    }

    /// Returns *true* if some id carries `label`
    pub fn contains_label(&self, label: &str) -> bool {
        self.map.contains_right(label)
    }

    /// Returns the label of `id`
    pub fn get(&self, id: I) -> Result<&str> {
        self.map
            .forward(&id)
            .map(String::as_str)
            .ok_or_else(|| id.missing_label())
    }

    /// Returns the id carrying `label`
    pub fn id_of(&self, label: &str) -> Result<I> {
        self.map
            .backward(label)
            .copied()
            .ok_or_else(|| GraphError::LabelNotFound(label.to_string()))
    }

    /// Fails if `label` is empty or already bound to an id other than `id`
    pub fn ensure_assignable(&self, id: I, label: &str) -> Result<()> {
        validate_label(label)?;
        match self.map.backward(label) {
            Some(other) if *other != id => Err(GraphError::DuplicateLabel(label.to_string())),
            _ => Ok(()),
        }
    }

    /// Binds `label` to `id`, replacing a previous label of `id`
    pub fn set(&mut self, id: I, label: &str) -> Result<()> {
        self.ensure_assignable(id, label)?;
        trace!("label {id} as '{label}'");
        self.map.insert(id, label.to_string());
        Ok(())
    }

    /// Removes and returns the label of `id`
    pub fn remove(&mut self, id: I) -> Result<String> {
        self.map.remove_left(&id).ok_or_else(|| id.missing_label())
    }

    /// Removes the label of `id` if there is one
    pub fn forget(&mut self, id: I) -> Option<String> {
        self.map.remove_left(&id)
    }

    /// Removes all labels of ids for which `doomed` returns *true*
    pub fn forget_if(&mut self, mut doomed: impl FnMut(I) -> bool) {
        self.map.retain(|id, _| !doomed(*id));
    }

    /// Iterates over all `(id, label)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (I, &str)> + '_ {
        self.map.iter().map(|(id, l)| (*id, l.as_str()))
    }
}

/// Labels of a graph, its vertices, and its edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOverlay {
    graph: Option<String>,
    pub(crate) vertices: LabelMap<VertexId>,
    pub(crate) edges: LabelMap<EdgeId>,
}

impl LabelOverlay {
    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    pub fn graph(&self) -> Result<&str> {
        self.graph.as_deref().ok_or(GraphError::GraphLabelNotFound)
    }

    pub fn set_graph(&mut self, label: &str) -> Result<()> {
        validate_label(label)?;
        self.graph = Some(label.to_string());
        Ok(())
    }

    pub fn remove_graph(&mut self) -> Result<String> {
        self.graph.take().ok_or(GraphError::GraphLabelNotFound)
    }

    pub fn vertices(&self) -> &LabelMap<VertexId> {
        &self.vertices
    }

    pub fn edges(&self) -> &LabelMap<EdgeId> {
        &self.edges
    }
}
