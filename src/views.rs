/*!
# Iteration Views

Lazy, read-only iterators over a [`DenseGraph`](crate::graph::DenseGraph):
- [`Vertices`]: all vertex ids, ascending by matrix index,
- [`Edges`]: all edges in row-major order of the matrix (by tail index, then head index),
- [`VertexLabels`] / [`EdgeLabels`]: `(id, label)` pairs of the labelled vertices/edges, in the
  same order as the plain views.

All views are double-ended: iterating from the back yields exactly the reversed sequence.
They borrow the graph immutably, so the graph cannot change while a view is alive.
A clone of a view continues from the same position; ask the graph for a new view to start over.
*/

use std::iter::FusedIterator;

use crate::{
    edge::EdgeId,
    labels::LabelMap,
    repr::AdjacencyStore,
    utils::IndexMap,
    vertex::*,
};

/// Vertex ids by ascending index
#[derive(Debug, Clone)]
pub struct Vertices<'a> {
    index: &'a IndexMap,
    front: Index,
    back: Index,
}

impl<'a> Vertices<'a> {
    pub(crate) fn new(index: &'a IndexMap) -> Self {
        Self {
            index,
            front: 0,
            back: index.len(),
        }
    }
}

impl Iterator for Vertices<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let id = self.index.id_at(self.front)?;
        self.front += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Vertices<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let id = self.index.id_at(self.back - 1)?;
        self.back -= 1;
        Some(id)
    }
}

impl ExactSizeIterator for Vertices<'_> {}
impl FusedIterator for Vertices<'_> {}

/// Edges in row-major order.
///
/// Holds a window `front..back` of flat matrix positions and scans for the next set cell
/// from either end.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    store: &'a AdjacencyStore,
    index: &'a IndexMap,
    front: usize,
    back: usize,
}

impl<'a> Edges<'a> {
    pub(crate) fn new(store: &'a AdjacencyStore, index: &'a IndexMap) -> Self {
        Self {
            store,
            index,
            front: 0,
            back: store.number_of_cells(),
        }
    }

    fn edge_at(&self, pos: usize) -> Option<EdgeId> {
        let (i, j) = self.store.position(pos);
        Some(EdgeId(self.index.id_at(i)?, self.index.id_at(j)?))
    }
}

impl Iterator for Edges<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.store.next_set(self.front, self.back)?;
        self.front = pos + 1;
        self.edge_at(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self
            .store
            .number_of_edges()
            .min(self.back.saturating_sub(self.front));
        (0, Some(upper))
    }
}

impl DoubleEndedIterator for Edges<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let pos = self.store.prev_set(self.front, self.back)?;
        self.back = pos;
        self.edge_at(pos)
    }
}

impl FusedIterator for Edges<'_> {}

macro_rules! label_view {
    ($(#[$meta:meta])* $name:ident, $inner:ident, $id:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<'a> {
            inner: $inner<'a>,
            labels: &'a LabelMap<$id>,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(inner: $inner<'a>, labels: &'a LabelMap<$id>) -> Self {
                Self { inner, labels }
            }
        }

        impl<'a> Iterator for $name<'a> {
            type Item = ($id, &'a str);

            fn next(&mut self) -> Option<Self::Item> {
                let labels = self.labels;
                self.inner
                    .by_ref()
                    .find_map(|id| labels.get(id).ok().map(|l| (id, l)))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (0, self.inner.size_hint().1)
            }
        }

        impl DoubleEndedIterator for $name<'_> {
            fn next_back(&mut self) -> Option<Self::Item> {
                loop {
                    let id = self.inner.next_back()?;
                    if let Ok(label) = self.labels.get(id) {
                        return Some((id, label));
                    }
                }
            }
        }

        impl FusedIterator for $name<'_> {}
    };
}

label_view!(
    /// `(vertex, label)` pairs of all labelled vertices by ascending index
    VertexLabels,
    Vertices,
    VertexId
);

label_view!(
    /// `(edge, label)` pairs of all labelled edges in row-major order
    EdgeLabels,
    Edges,
    EdgeId
);
