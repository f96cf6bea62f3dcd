/*!
# Exchange Matrices

Matrix types used to import graphs into and export graphs from a
[`DenseGraph`](crate::graph::DenseGraph):
- [`AdjacencyMatrix`]: a dense row-major `rows x cols` matrix of `i8`,
- [`SparseAdjacencyMatrix`]: the same in compressed-sparse-row layout.

Neither type enforces squareness; it is checked when a graph is built from them.
Any non-zero value counts as an edge.
*/

use itertools::Itertools;

use crate::error::{GraphError, Result};

/// Dense row-major matrix of `i8`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i8>,
}

impl AdjacencyMatrix {
    /// Creates a `rows x cols` matrix of zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Creates a matrix from row-major data.
    /// Fails if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i8>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(GraphError::invalid_structure(format!(
                "{rows}x{cols} matrix requires {} cells, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a sequence of rows. Fails if rows differ in length.
    ///
    /// # Example
    /// ```
    /// use densegraph::repr::AdjacencyMatrix;
    ///
    /// let m = AdjacencyMatrix::from_rows([[0, 1], [0, 0]]).unwrap();
    /// assert!(m.is_square());
    /// assert_eq!(m.get(0, 1), 1);
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[i8]>,
    {
        let mut data = Vec::new();
        let mut num_rows = 0;
        let mut cols = None;

        for row in rows {
            let row = row.as_ref();
            match cols {
                None => cols = Some(row.len()),
                Some(c) if c != row.len() => {
                    return Err(GraphError::invalid_structure(format!(
                        "row {num_rows} has {} columns, expected {c}",
                        row.len()
                    )));
                }
                _ => {}
            }
            data.extend_from_slice(row);
            num_rows += 1;
        }

        Ok(Self {
            rows: num_rows,
            cols: cols.unwrap_or(0),
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// ** Panics if `i >= rows || j >= cols` **
    pub fn get(&self, i: usize, j: usize) -> i8 {
        assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    /// ** Panics if `i >= rows || j >= cols` **
    pub fn set(&mut self, i: usize, j: usize, value: i8) {
        assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j] = value;
    }

    /// Row-major cell data
    pub fn as_slice(&self) -> &[i8] {
        &self.data
    }

    /// Iterates over all non-zero cells as `(row, column, value)` in row-major order
    pub fn nonzeros(&self) -> impl Iterator<Item = (usize, usize, i8)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0)
            .map(|(x, &v)| (x / self.cols, x % self.cols, v))
    }

    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl From<&SparseAdjacencyMatrix> for AdjacencyMatrix {
    fn from(sparse: &SparseAdjacencyMatrix) -> Self {
        let mut dense = AdjacencyMatrix::new(sparse.rows(), sparse.cols());
        for (i, j, v) in sparse.iter() {
            dense.set(i, j, v);
        }
        dense
    }
}

/// Compressed-sparse-row matrix of `i8` without explicitly stored zeros
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseAdjacencyMatrix {
    rows: usize,
    cols: usize,
    /// `offsets[i]..offsets[i + 1]` is the range of row `i` in `columns`/`values`
    offsets: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<i8>,
}

impl Default for SparseAdjacencyMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl SparseAdjacencyMatrix {
    /// Creates a `rows x cols` matrix without entries
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            offsets: vec![0; rows + 1],
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates a matrix from `(row, column, value)` triplets in any order.
    /// Values of duplicate positions are summed (saturating), zeros are dropped.
    /// Fails if a triplet lies outside of `rows x cols`.
    ///
    /// # Example
    /// ```
    /// use densegraph::repr::SparseAdjacencyMatrix;
    ///
    /// let m = SparseAdjacencyMatrix::from_triplets(3, 3, [(2, 0, 1), (0, 1, 1)]).unwrap();
    /// assert_eq!(m.nnz(), 2);
    /// assert_eq!(m.get(2, 0), 1);
    /// assert_eq!(m.get(1, 1), 0);
    /// ```
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i8)>,
    {
        let mut triplets = triplets.into_iter().collect_vec();
        if let Some(&(i, j, _)) = triplets.iter().find(|&&(i, j, _)| i >= rows || j >= cols) {
            return Err(GraphError::invalid_structure(format!(
                "entry ({i}, {j}) lies outside of a {rows}x{cols} matrix"
            )));
        }
        triplets.sort_by_key(|&(i, j, _)| (i, j));

        let merged = triplets
            .into_iter()
            .coalesce(|a, b| {
                if (a.0, a.1) == (b.0, b.1) {
                    Ok((a.0, a.1, a.2.saturating_add(b.2)))
                } else {
                    Err((a, b))
                }
            })
            .filter(|&(_, _, v)| v != 0);

        let mut matrix = Self::new(rows, cols);
        for (i, j, v) in merged {
            matrix.offsets[i + 1] += 1;
            matrix.columns.push(j);
            matrix.values.push(v);
        }
        for i in 0..rows {
            matrix.offsets[i + 1] += matrix.offsets[i];
        }

        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the value at `(i, j)`, which is `0` for positions without entry.
    /// ** Panics if `i >= rows || j >= cols` **
    pub fn get(&self, i: usize, j: usize) -> i8 {
        assert!(i < self.rows && j < self.cols);
        let range = self.offsets[i]..self.offsets[i + 1];
        match self.columns[range.clone()].binary_search(&j) {
            Ok(pos) => self.values[range.start + pos],
            Err(_) => 0,
        }
    }

    /// Iterates over the stored entries of row `i` as `(column, value)`
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, i8)> + '_ {
        let range = self.offsets[i]..self.offsets[i + 1];
        self.columns[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Iterates over all stored entries as `(row, column, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i8)> + '_ {
        (0..self.rows).flat_map(move |i| self.row(i).map(move |(j, v)| (i, j, v)))
    }
}

impl From<&AdjacencyMatrix> for SparseAdjacencyMatrix {
    fn from(dense: &AdjacencyMatrix) -> Self {
        let mut sparse = SparseAdjacencyMatrix::new(dense.rows(), dense.cols());
        for (i, j, v) in dense.nonzeros() {
            sparse.offsets[i + 1] += 1;
            sparse.columns.push(j);
            sparse.values.push(v);
        }
        for i in 0..dense.rows() {
            sparse.offsets[i + 1] += sparse.offsets[i];
        }
        sparse
    }
}
