//! Dense immutable matrix type for 2D single-precision data.

use serde::{Deserialize, Serialize};

use crate::error::{MatrizError, Result};
use crate::solve;

/// Default tolerance for element comparisons ([`Matrix::approx_eq`] and
/// [`Matrix::eq_elem`]).
pub const EQUALITY_TOLERANCE: f32 = 1e-4;

/// A dense 2D matrix of `f32` values (row-major storage).
///
/// Both dimensions are always at least 1, and the backing buffer is owned
/// exclusively by the instance. Every transformation returns a freshly
/// allocated matrix; no two instances ever share storage.
///
/// A 1x1 matrix doubles as a scalar in arithmetic: adding, subtracting, or
/// multiplying with one broadcasts the single element over the other operand.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("2*3=6 elements");
/// assert_eq!(m.size(), (2, 3));
/// let t = m.transpose();
/// assert_eq!(t.size(), (3, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a new matrix from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if either dimension is zero or
    /// the data length does not equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{rows}x{cols} with {} elements", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a new matrix from a grid of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if the grid is empty, a row is
    /// empty, or the rows have unequal lengths.
    pub fn from_rows(grid: &[Vec<f32>]) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MatrizError::ShapeMismatch {
                expected: "at least one row and one column".to_string(),
                actual: format!("{rows}x{cols}"),
            });
        }
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            if row.len() != cols {
                return Err(MatrizError::ShapeMismatch {
                    expected: format!("rows of length {cols}"),
                    actual: format!("row of length {}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a 1x1 matrix holding a single value.
    #[must_use]
    pub fn scalar(value: f32) -> Self {
        Self {
            data: vec![value],
            rows: 1,
            cols: 1,
        }
    }

    /// Parses a matrix from delimited text using the default delimiters
    /// (`' '` between columns, `';'` between rows).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Parse`] on empty input, ragged rows, or
    /// unparseable elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::prelude::*;
    ///
    /// let m = Matrix::parse("0 1 2;3 4 5").expect("well-formed text");
    /// assert_eq!(m.size(), (2, 3));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        crate::primitives::TextCodec::default().parse(text)
    }

    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "matrix dimensions must be >= 1");
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "matrix dimensions must be >= 1");
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        assert!(n >= 1, "matrix dimensions must be >= 1");
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn shape_str(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    fn same_shape(rows: usize, cols: usize, data: Vec<f32>) -> Self {
        Self { data, rows, cols }
    }

    /// Gets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if either index is outside
    /// the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        self.check_index(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Extracts the single element of a 1x1 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotScalar`] if the matrix is not 1x1.
    pub fn to_scalar(&self) -> Result<f32> {
        if self.size() == (1, 1) {
            Ok(self.data[0])
        } else {
            Err(MatrizError::NotScalar {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns row `row` as a 1xn matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if the row does not exist.
    pub fn row(&self, row: usize) -> Result<Self> {
        self.check_index(row, 0)?;
        self.submatrix(row, row, 0, self.cols - 1)
    }

    /// Returns column `col` as an mx1 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if the column does not
    /// exist.
    pub fn col(&self, col: usize) -> Result<Self> {
        self.check_index(0, col)?;
        self.submatrix(0, self.rows - 1, col, col)
    }

    /// Returns the listed rows, in the listed order, as a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if any index is outside the
    /// matrix, or [`MatrizError::ShapeMismatch`] if no indices are given.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self> {
        if indices.is_empty() {
            return Err(MatrizError::ShapeMismatch {
                expected: "at least one row index".to_string(),
                actual: "none".to_string(),
            });
        }
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &row in indices {
            self.check_index(row, 0)?;
            let start = self.offset(row, 0);
            data.extend_from_slice(&self.data[start..start + self.cols]);
        }
        Ok(Self::same_shape(indices.len(), self.cols, data))
    }

    /// Returns the listed columns, in the listed order, as a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if any index is outside the
    /// matrix, or [`MatrizError::ShapeMismatch`] if no indices are given.
    pub fn select_cols(&self, indices: &[usize]) -> Result<Self> {
        if indices.is_empty() {
            return Err(MatrizError::ShapeMismatch {
                expected: "at least one column index".to_string(),
                actual: "none".to_string(),
            });
        }
        for &col in indices {
            self.check_index(0, col)?;
        }
        let mut data = Vec::with_capacity(self.rows * indices.len());
        for row in 0..self.rows {
            for &col in indices {
                data.push(self.data[self.offset(row, col)]);
            }
        }
        Ok(Self::same_shape(self.rows, indices.len(), data))
    }

    /// Returns the rows `from..=to` as a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if the range is outside the
    /// matrix or inverted.
    pub fn row_range(&self, from: usize, to: usize) -> Result<Self> {
        self.submatrix(from, to, 0, self.cols - 1)
    }

    /// Returns the columns `from..=to` as a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if the range is outside the
    /// matrix or inverted.
    pub fn col_range(&self, from: usize, to: usize) -> Result<Self> {
        self.submatrix(0, self.rows - 1, from, to)
    }

    /// Returns the sub-matrix spanning rows `from_row..=to_row` and columns
    /// `from_col..=to_col` (inclusive bounds).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if any bound is outside the
    /// matrix or a range is inverted.
    pub fn submatrix(
        &self,
        from_row: usize,
        to_row: usize,
        from_col: usize,
        to_col: usize,
    ) -> Result<Self> {
        self.check_index(from_row, from_col)?;
        self.check_index(to_row, to_col)?;
        if to_row < from_row || to_col < from_col {
            return Err(MatrizError::IndexOutOfBounds {
                row: to_row,
                col: to_col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut data = Vec::with_capacity((to_row - from_row + 1) * (to_col - from_col + 1));
        for row in from_row..=to_row {
            let start = self.offset(row, from_col);
            let end = self.offset(row, to_col);
            data.extend_from_slice(&self.data[start..=end]);
        }
        Ok(Self::same_shape(
            to_row - from_row + 1,
            to_col - from_col + 1,
            data,
        ))
    }

    /// Concatenates `other` to the right of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if the row counts differ.
    pub fn concat_h(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{} rows", self.rows),
                actual: format!("{} rows", other.rows),
            });
        }
        let mut data = Vec::with_capacity(self.rows * (self.cols + other.cols));
        for row in 0..self.rows {
            let start = self.offset(row, 0);
            data.extend_from_slice(&self.data[start..start + self.cols]);
            let other_start = other.offset(row, 0);
            data.extend_from_slice(&other.data[other_start..other_start + other.cols]);
        }
        Ok(Self::same_shape(self.rows, self.cols + other.cols, data))
    }

    /// Concatenates `other` below this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if the column counts differ.
    pub fn concat_v(&self, other: &Self) -> Result<Self> {
        if self.cols != other.cols {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{} columns", self.cols),
                actual: format!("{} columns", other.cols),
            });
        }
        let mut data = Vec::with_capacity((self.rows + other.rows) * self.cols);
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Self::same_shape(self.rows + other.rows, self.cols, data))
    }

    /// Returns a copy with the element at (row, col) replaced.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if either index is outside
    /// the matrix.
    pub fn insert(&self, row: usize, col: usize, value: f32) -> Result<Self> {
        self.check_index(row, col)?;
        let mut copy = self.clone();
        let offset = copy.offset(row, col);
        copy.data[offset] = value;
        Ok(copy)
    }

    /// Returns a copy with `other` written in starting at (from_row,
    /// from_col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if `other` would overflow
    /// the target bounds.
    pub fn insert_matrix(&self, from_row: usize, from_col: usize, other: &Self) -> Result<Self> {
        self.check_index(from_row, from_col)?;
        self.check_index(from_row + other.rows - 1, from_col + other.cols - 1)?;
        let mut copy = self.clone();
        for row in 0..other.rows {
            for col in 0..other.cols {
                let offset = copy.offset(from_row + row, from_col + col);
                copy.data[offset] = other.data[other.offset(row, col)];
            }
        }
        Ok(copy)
    }

    /// Adds `other` using the broadcast rule: a 1x1 operand acts as a
    /// scalar, otherwise the shapes must match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] for any other shape
    /// combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::prelude::*;
    ///
    /// let a = Matrix::parse("1 2;3 4").expect("well-formed text");
    /// let sum = a.add(&Matrix::scalar(10.0)).expect("1x1 broadcasts");
    /// assert_eq!(sum.get(1, 1), Ok(14.0));
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        if other.size() == (1, 1) {
            Ok(self.add_scalar(other.data[0]))
        } else if self.size() == (1, 1) {
            Ok(other.add_scalar(self.data[0]))
        } else if self.size() == other.size() {
            let data = self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect();
            Ok(Self::same_shape(self.rows, self.cols, data))
        } else {
            Err(MatrizError::ShapeMismatch {
                expected: self.shape_str(),
                actual: other.shape_str(),
            })
        }
    }

    /// Subtracts `other` using the same broadcast rule as [`Matrix::add`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] for incompatible shapes.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.map(|v| -v))
    }

    /// Adds a scalar to every element.
    #[must_use]
    pub fn add_scalar(&self, scalar: f32) -> Self {
        self.map(|v| v + scalar)
    }

    /// Subtracts a scalar from every element.
    #[must_use]
    pub fn sub_scalar(&self, scalar: f32) -> Self {
        self.add_scalar(-scalar)
    }

    /// Adds a 1xn row matrix to every row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless `row` is 1xn with `n`
    /// equal to this matrix's column count.
    pub fn add_row(&self, row: &Self) -> Result<Self> {
        self.check_row_operand(row)?;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(k, v)| v + row.data[k % self.cols])
            .collect();
        Ok(Self::same_shape(self.rows, self.cols, data))
    }

    /// Adds an mx1 column matrix to every column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless `col` is mx1 with `m`
    /// equal to this matrix's row count.
    pub fn add_col(&self, col: &Self) -> Result<Self> {
        self.check_col_operand(col)?;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(k, v)| v + col.data[k / self.cols])
            .collect();
        Ok(Self::same_shape(self.rows, self.cols, data))
    }

    /// Subtracts a 1xn row matrix from every row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless `row` is a matching
    /// row.
    pub fn sub_row(&self, row: &Self) -> Result<Self> {
        self.add_row(&row.map(|v| -v))
    }

    /// Subtracts an mx1 column matrix from every column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless `col` is a matching
    /// column.
    pub fn sub_col(&self, col: &Self) -> Result<Self> {
        self.add_col(&col.map(|v| -v))
    }

    /// Multiplies with `other`: the matrix product when the inner
    /// dimensions agree, otherwise the scalar broadcast rule when either
    /// operand is 1x1.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] for any other shape
    /// combination.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.cols == other.rows {
            Ok(self.matmul(other))
        } else if other.size() == (1, 1) {
            Ok(self.mul_scalar(other.data[0]))
        } else if self.size() == (1, 1) {
            Ok(other.mul_scalar(self.data[0]))
        } else {
            Err(MatrizError::ShapeMismatch {
                expected: format!("inner dimensions to agree with {}", self.shape_str()),
                actual: other.shape_str(),
            })
        }
    }

    fn matmul(&self, other: &Self) -> Self {
        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[self.offset(i, k)] * other.data[other.offset(k, j)];
                }
                data[i * other.cols + j] = sum;
            }
        }
        Self::same_shape(self.rows, other.cols, data)
    }

    /// Multiplies every element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        self.map(|v| v * scalar)
    }

    /// Divides every element by a scalar.
    #[must_use]
    pub fn div_scalar(&self, scalar: f32) -> Self {
        self.mul_scalar(1.0 / scalar)
    }

    /// Multiplies every row elementwise by a 1xn row matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless `row` is a matching
    /// row.
    pub fn mul_row(&self, row: &Self) -> Result<Self> {
        self.check_row_operand(row)?;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(k, v)| v * row.data[k % self.cols])
            .collect();
        Ok(Self::same_shape(self.rows, self.cols, data))
    }

    /// Multiplies every column elementwise by an mx1 column matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless `col` is a matching
    /// column.
    pub fn mul_col(&self, col: &Self) -> Result<Self> {
        self.check_col_operand(col)?;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(k, v)| v * col.data[k / self.cols])
            .collect();
        Ok(Self::same_shape(self.rows, self.cols, data))
    }

    /// Multiplies elementwise (Hadamard product).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless the shapes match
    /// exactly.
    pub fn mul_elem(&self, other: &Self) -> Result<Self> {
        if self.size() != other.size() {
            return Err(MatrizError::ShapeMismatch {
                expected: self.shape_str(),
                actual: other.shape_str(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .collect();
        Ok(Self::same_shape(self.rows, self.cols, data))
    }

    /// Divides every row elementwise by a 1xn row matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless `row` is a matching
    /// row.
    pub fn div_row(&self, row: &Self) -> Result<Self> {
        self.mul_row(&row.map(|v| 1.0 / v))
    }

    /// Divides every column elementwise by an mx1 column matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless `col` is a matching
    /// column.
    pub fn div_col(&self, col: &Self) -> Result<Self> {
        self.mul_col(&col.map(|v| 1.0 / v))
    }

    /// Divides elementwise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless the shapes match
    /// exactly.
    pub fn div_elem(&self, other: &Self) -> Result<Self> {
        self.mul_elem(&other.map(|v| 1.0 / v))
    }

    fn check_row_operand(&self, row: &Self) -> Result<()> {
        if row.rows == 1 && row.cols == self.cols {
            Ok(())
        } else {
            Err(MatrizError::ShapeMismatch {
                expected: format!("1x{}", self.cols),
                actual: row.shape_str(),
            })
        }
    }

    fn check_col_operand(&self, col: &Self) -> Result<()> {
        if col.cols == 1 && col.rows == self.rows {
            Ok(())
        } else {
            Err(MatrizError::ShapeMismatch {
                expected: format!("{}x1", self.rows),
                actual: col.shape_str(),
            })
        }
    }

    /// Sums every row; returns an mx1 matrix.
    #[must_use]
    pub fn sum_rows(&self) -> Self {
        let data = (0..self.rows)
            .map(|row| {
                let start = self.offset(row, 0);
                self.data[start..start + self.cols].iter().sum()
            })
            .collect();
        Self::same_shape(self.rows, 1, data)
    }

    /// Sums every column; returns a 1xn matrix.
    #[must_use]
    pub fn sum_cols(&self) -> Self {
        let data = (0..self.cols)
            .map(|col| (0..self.rows).map(|row| self.data[self.offset(row, col)]).sum())
            .collect();
        Self::same_shape(1, self.cols, data)
    }

    /// Sums all elements; returns a 1x1 matrix.
    #[must_use]
    pub fn sum(&self) -> Self {
        Self::scalar(self.data.iter().sum())
    }

    /// Sums the squares of all elements; returns a 1x1 matrix.
    #[must_use]
    pub fn sum_squares(&self) -> Self {
        self.map(|v| v * v).sum()
    }

    /// Finds the minimum of every row together with its column index.
    ///
    /// Ties resolve to the first occurrence. Returns the mx1 extrema matrix
    /// and the mx1 index matrix (indices stored as `f32`).
    #[must_use]
    pub fn min_rows(&self) -> (Self, Self) {
        self.extrema_rows(|candidate, best| candidate < best)
    }

    /// Finds the maximum of every row together with its column index.
    ///
    /// Ties resolve to the first occurrence.
    #[must_use]
    pub fn max_rows(&self) -> (Self, Self) {
        self.extrema_rows(|candidate, best| candidate > best)
    }

    /// Finds the minimum of every column together with its row index.
    ///
    /// Ties resolve to the first occurrence. Returns the 1xn extrema matrix
    /// and the 1xn index matrix (indices stored as `f32`).
    #[must_use]
    pub fn min_cols(&self) -> (Self, Self) {
        self.extrema_cols(|candidate, best| candidate < best)
    }

    /// Finds the maximum of every column together with its row index.
    ///
    /// Ties resolve to the first occurrence.
    #[must_use]
    pub fn max_cols(&self) -> (Self, Self) {
        self.extrema_cols(|candidate, best| candidate > best)
    }

    fn extrema_rows(&self, better: impl Fn(f32, f32) -> bool) -> (Self, Self) {
        let mut extrema = Vec::with_capacity(self.rows);
        let mut indices = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let mut best = self.data[self.offset(row, 0)];
            let mut best_col = 0;
            for col in 1..self.cols {
                let candidate = self.data[self.offset(row, col)];
                if better(candidate, best) {
                    best = candidate;
                    best_col = col;
                }
            }
            extrema.push(best);
            indices.push(best_col as f32);
        }
        (
            Self::same_shape(self.rows, 1, extrema),
            Self::same_shape(self.rows, 1, indices),
        )
    }

    fn extrema_cols(&self, better: impl Fn(f32, f32) -> bool) -> (Self, Self) {
        let mut extrema = Vec::with_capacity(self.cols);
        let mut indices = Vec::with_capacity(self.cols);
        for col in 0..self.cols {
            let mut best = self.data[self.offset(0, col)];
            let mut best_row = 0;
            for row in 1..self.rows {
                let candidate = self.data[self.offset(row, col)];
                if better(candidate, best) {
                    best = candidate;
                    best_row = row;
                }
            }
            extrema.push(best);
            indices.push(best_row as f32);
        }
        (
            Self::same_shape(1, self.cols, extrema),
            Self::same_shape(1, self.cols, indices),
        )
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for row in 0..self.rows {
            for col in 0..self.cols {
                data[col * self.rows + row] = self.data[self.offset(row, col)];
            }
        }
        Self::same_shape(self.cols, self.rows, data)
    }

    /// Extracts the main diagonal as a min(m, n) x 1 column.
    #[must_use]
    pub fn diagonal(&self) -> Self {
        let len = self.rows.min(self.cols);
        let data = (0..len).map(|i| self.data[self.offset(i, i)]).collect();
        Self::same_shape(len, 1, data)
    }

    /// Flattens the matrix column-major into an (m*n) x 1 column.
    #[must_use]
    pub fn vectorize(&self) -> Self {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[self.offset(row, col)]);
            }
        }
        Self::same_shape(self.rows * self.cols, 1, data)
    }

    /// Applies a function to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::prelude::*;
    ///
    /// let m = Matrix::parse("1 -2;-3 4").expect("well-formed text");
    /// let abs = m.map(f32::abs);
    /// assert_eq!(abs.get(1, 0), Ok(3.0));
    /// ```
    #[must_use]
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        let data = self.data.iter().map(|&v| f(v)).collect();
        Self::same_shape(self.rows, self.cols, data)
    }

    /// Flags every element satisfying the predicate with 1.0, all others
    /// with 0.0.
    #[must_use]
    pub fn mask(&self, pred: impl Fn(f32) -> bool) -> Self {
        self.map(|v| if pred(v) { 1.0 } else { 0.0 })
    }

    /// Collects, in column-major scan order, every element whose
    /// same-position entry in `mask` is nonzero, as a column vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if the mask shape differs or
    /// the mask selects nothing.
    pub fn select_by_mask(&self, mask: &Self) -> Result<Self> {
        if self.size() != mask.size() {
            return Err(MatrizError::ShapeMismatch {
                expected: self.shape_str(),
                actual: mask.shape_str(),
            });
        }
        let mut data = Vec::new();
        for col in 0..self.cols {
            for row in 0..self.rows {
                if mask.data[mask.offset(row, col)] != 0.0 {
                    data.push(self.data[self.offset(row, col)]);
                }
            }
        }
        if data.is_empty() {
            return Err(MatrizError::ShapeMismatch {
                expected: "at least one selected element".to_string(),
                actual: "empty selection".to_string(),
            });
        }
        let len = data.len();
        Ok(Self::same_shape(len, 1, data))
    }

    /// Prepends a row of ones (intercept row).
    #[must_use]
    pub fn prepend_ones_row(&self) -> Self {
        let mut data = vec![1.0; self.cols];
        data.extend_from_slice(&self.data);
        Self::same_shape(self.rows + 1, self.cols, data)
    }

    /// Prepends a column of ones (intercept column).
    #[must_use]
    pub fn prepend_ones_col(&self) -> Self {
        let mut data = Vec::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            data.push(1.0);
            let start = self.offset(row, 0);
            data.extend_from_slice(&self.data[start..start + self.cols]);
        }
        Self::same_shape(self.rows, self.cols + 1, data)
    }

    /// Removes the top row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::StructuralLimit`] if the matrix has a single
    /// row.
    pub fn drop_top_row(&self) -> Result<Self> {
        if self.rows < 2 {
            return Err(MatrizError::StructuralLimit {
                message: "cannot remove the only row".to_string(),
            });
        }
        Ok(Self::same_shape(
            self.rows - 1,
            self.cols,
            self.data[self.cols..].to_vec(),
        ))
    }

    /// Removes the leftmost column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::StructuralLimit`] if the matrix has a single
    /// column.
    pub fn drop_left_col(&self) -> Result<Self> {
        if self.cols < 2 {
            return Err(MatrizError::StructuralLimit {
                message: "cannot remove the only column".to_string(),
            });
        }
        let mut data = Vec::with_capacity(self.rows * (self.cols - 1));
        for row in 0..self.rows {
            let start = self.offset(row, 1);
            data.extend_from_slice(&self.data[start..start + self.cols - 1]);
        }
        Ok(Self::same_shape(self.rows, self.cols - 1, data))
    }

    /// Returns the distinct element values, sorted ascending.
    #[must_use]
    pub fn unique_values(&self) -> Vec<f32> {
        let mut values = self.data.clone();
        values.sort_by(f32::total_cmp);
        values.dedup();
        values
    }

    /// Compares elementwise against `other` with the default tolerance,
    /// returning a 1/0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless the shapes match
    /// exactly.
    pub fn eq_elem(&self, other: &Self) -> Result<Self> {
        if self.size() != other.size() {
            return Err(MatrizError::ShapeMismatch {
                expected: self.shape_str(),
                actual: other.shape_str(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| if (a - b).abs() < EQUALITY_TOLERANCE { 1.0 } else { 0.0 })
            .collect();
        Ok(Self::same_shape(self.rows, self.cols, data))
    }

    /// Compares against `other` within `tolerance`: equal iff same shape and
    /// no paired elements differ by more. A tolerance of 0 is an exact
    /// comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::prelude::*;
    ///
    /// let a = Matrix::parse("1 2;3 4").expect("well-formed text");
    /// let b = Matrix::parse("1.00004 2;3 4").expect("well-formed text");
    /// assert!(a.approx_eq(&b, 1e-4));
    /// assert!(!a.approx_eq(&b, 0.0));
    /// ```
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.size() == other.size()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Applies the sigmoid function to every element.
    #[must_use]
    pub fn sigmoid(&self) -> Self {
        self.map(|v| 1.0 / (1.0 + (-v).exp()))
    }

    /// Applies the natural logarithm to every element.
    #[must_use]
    pub fn ln(&self) -> Self {
        self.map(f32::ln)
    }

    /// Computes the inverse via Gauss-Jordan elimination with deferred
    /// pivoting on a private working copy.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for non-square input,
    /// [`MatrizError::Singular`] if a pivot stays below tolerance after the
    /// deferred-retry pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::prelude::*;
    ///
    /// let a = Matrix::parse("0 1 -2;3 4 5;6 7 8").expect("well-formed text");
    /// let inv = a.inv().expect("invertible");
    /// let product = a.mul(&inv).expect("compatible shapes");
    /// assert!(product.approx_eq(&Matrix::identity(3), 1e-3));
    /// ```
    pub fn inv(&self) -> Result<Self> {
        solve::invert(self)
    }

    /// Computes the Moore-Penrose pseudo-inverse via a rank-revealing
    /// Cholesky factorization (geninv).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Singular`] if the Gram matrix has no
    /// numerically positive diagonal (rank zero input).
    pub fn pinv(&self) -> Result<Self> {
        solve::pseudo_invert(self)
    }

    /// Singular value decomposition. Declared for contract completeness but
    /// intentionally not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`MatrizError::Unsupported`].
    pub fn svd(&self) -> Result<(Self, Self, Self)> {
        Err(MatrizError::Unsupported {
            operation: "svd".to_string(),
        })
    }

    /// Renders the matrix row-major with the given delimiters, without a
    /// trailing delimiter on the last element or row.
    #[must_use]
    pub fn to_delimited(&self, col_delim: char, row_delim: char) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push_str(&self.data[self.offset(row, col)].to_string());
                if col != self.cols - 1 {
                    out.push(col_delim);
                }
            }
            if row != self.rows - 1 {
                out.push(row_delim);
            }
        }
        out
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_delimited(' ', '\n'))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
