/*!
# Dense Adjacency Store

A square `order x order` byte matrix in a flat row-major buffer. Cell `(i, j)` is non-zero iff
the edge from the vertex at index `i` to the vertex at index `j` exists.

The store only knows indices; mapping them to vertex ids is the job of the
[`IndexMap`](crate::utils::IndexMap). It grows by one row/column at a time and compacts in place
when a row/column is removed, so that surviving cells keep their relative positions.
*/

use crate::{edge::NumEdges, vertex::*};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyStore {
    order: NumVertices,
    cells: Vec<u8>,
    num_edges: NumEdges,
}

#[inline]
fn flat(row: Index, column: Index, width: usize) -> usize {
    row * width + column
}

impl AdjacencyStore {
    /// Creates an `n x n` store without edges
    pub fn new(n: NumVertices) -> Self {
        Self {
            order: n,
            cells: vec![0; n * n],
            num_edges: 0,
        }
    }

    /// Creates an empty store that can grow to `n x n` without reallocating
    pub fn with_capacity(n: NumVertices) -> Self {
        Self {
            order: 0,
            cells: Vec::with_capacity(n * n),
            num_edges: 0,
        }
    }

    /// Number of rows (and columns)
    pub fn order(&self) -> NumVertices {
        self.order
    }

    /// Number of non-zero cells
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Number of cells, i.e. `order^2`
    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns *true* if cell `(i, j)` is set.
    /// ** Panics if `i >= order || j >= order` **
    pub fn get(&self, i: Index, j: Index) -> bool {
        assert!(i < self.order && j < self.order);
        self.cells[flat(i, j, self.order)] != 0
    }

    /// Sets cell `(i, j)` and returns *true* if it was set before.
    /// ** Panics if `i >= order || j >= order` **
    pub fn set(&mut self, i: Index, j: Index) -> bool {
        assert!(i < self.order && j < self.order);
        let cell = &mut self.cells[flat(i, j, self.order)];
        let was_set = *cell != 0;
        if !was_set {
            *cell = 1;
            self.num_edges += 1;
        }
        was_set
    }

    /// Clears cell `(i, j)` and returns *true* if it was set before.
    /// ** Panics if `i >= order || j >= order` **
    pub fn clear(&mut self, i: Index, j: Index) -> bool {
        assert!(i < self.order && j < self.order);
        let cell = &mut self.cells[flat(i, j, self.order)];
        let was_set = *cell != 0;
        if was_set {
            *cell = 0;
            self.num_edges -= 1;
        }
        was_set
    }

    /// Returns row `i` as a slice.
    /// ** Panics if `i >= order` **
    pub fn row(&self, i: Index) -> &[u8] {
        let start = flat(i, 0, self.order);
        &self.cells[start..start + self.order]
    }

    /// Translates a flat position into `(row, column)`
    pub fn position(&self, flat_index: usize) -> (Index, Index) {
        (flat_index / self.order, flat_index % self.order)
    }

    /// Returns the first set flat position in `from..to`
    pub fn next_set(&self, from: usize, to: usize) -> Option<usize> {
        let to = to.min(self.cells.len());
        if from >= to {
            return None;
        }
        self.cells[from..to]
            .iter()
            .position(|&c| c != 0)
            .map(|offset| from + offset)
    }

    /// Returns the last set flat position in `from..to`
    pub fn prev_set(&self, from: usize, to: usize) -> Option<usize> {
        let to = to.min(self.cells.len());
        if from >= to {
            return None;
        }
        self.cells[from..to]
            .iter()
            .rposition(|&c| c != 0)
            .map(|offset| from + offset)
    }

    /// Iterates over the columns `j` with `(i, j)` set.
    /// ** Panics if `i >= order` **
    pub fn out_indices(&self, i: Index) -> impl Iterator<Item = Index> + '_ {
        self.row(i)
            .iter()
            .enumerate()
            .filter_map(|(j, &c)| (c != 0).then_some(j))
    }

    /// Iterates over the rows `i` with `(i, j)` set.
    /// ** Panics if `j >= order` **
    pub fn in_indices(&self, j: Index) -> impl Iterator<Item = Index> + '_ {
        assert!(j < self.order);
        (0..self.order).filter(move |&i| self.cells[flat(i, j, self.order)] != 0)
    }

    /// Appends an empty row and column and returns the new index (the old order)
    pub fn grow(&mut self) -> Index {
        let old = self.order;
        let new = old + 1;

        let mut cells = Vec::with_capacity(self.cells.capacity().max(new * new));
        for row in 0..old {
            cells.extend_from_slice(self.row(row));
            cells.push(0);
        }
        cells.resize(new * new, 0);

        self.cells = cells;
        self.order = new;
        old
    }

    /// Removes row `k` and column `k` by shifting all later rows/columns down by one.
    /// Returns the number of set cells that were dropped.
    /// ** Panics if `k >= order` **
    pub fn remove(&mut self, k: Index) -> NumEdges {
        assert!(k < self.order);
        let old = self.order;
        let new = old - 1;

        let dropped = self.out_indices(k).count() + self.in_indices(k).count()
            - usize::from(self.get(k, k));

        // Every target position is at most its source position, so a forward pass is safe.
        for i in 0..new {
            let src_row = i + usize::from(i >= k);
            for j in 0..new {
                let src_col = j + usize::from(j >= k);
                self.cells[flat(i, j, new)] = self.cells[flat(src_row, src_col, old)];
            }
        }
        self.cells.truncate(new * new);

        self.order = new;
        self.num_edges -= dropped;
        dropped
    }

    /// Reserves storage such that the store can grow to `n x n`
    pub fn reserve_order(&mut self, n: NumVertices) {
        self.cells.reserve((n * n).saturating_sub(self.cells.len()));
    }

    /// Recounts the non-zero cells
    pub fn count_set(&self) -> NumEdges {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}
