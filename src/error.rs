//! Error types for matriz operations.
//!
//! Every fallible operation in the crate reports one of these variants;
//! nothing is silently corrected and no operation partially mutates
//! caller-visible state before failing.

use std::fmt;

/// Main error type for matriz operations.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::ShapeMismatch {
///     expected: "3x3".to_string(),
///     actual: "3x5".to_string(),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MatrizError {
    /// Incompatible dimensions for concatenation, elementwise arithmetic,
    /// broadcast row/column operations, or matrix multiplication.
    ShapeMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Row/column index outside the matrix bounds.
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        cols: usize,
    },

    /// A scalar was requested from a matrix that is not 1x1.
    NotScalar {
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        cols: usize,
    },

    /// Inversion was requested for a non-square matrix.
    NotSquare {
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        cols: usize,
    },

    /// A pivot stayed below tolerance after the deferred-retry pass, so the
    /// matrix cannot be inverted.
    Singular {
        /// The offending pivot value
        pivot: f32,
        /// The diagonal index of the pivot
        index: usize,
    },

    /// A structural operation would leave the matrix without any rows or
    /// columns.
    StructuralLimit {
        /// What was attempted
        message: String,
    },

    /// Delimited text could not be parsed into a matrix.
    Parse {
        /// What went wrong
        message: String,
    },

    /// The operation is declared but intentionally not implemented.
    Unsupported {
        /// Operation name
        operation: String,
    },

    /// Invalid estimator parameter value provided.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, got {actual}")
            }
            MatrizError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of bounds for a {rows}x{cols} matrix"
                )
            }
            MatrizError::NotScalar { rows, cols } => {
                write!(f, "matrix is {rows}x{cols}, not 1x1")
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "matrix is {rows}x{cols} and therefore not invertible")
            }
            MatrizError::Singular { pivot, index } => {
                write!(
                    f,
                    "singular matrix: pivot {pivot} at diagonal index {index} is too close to zero"
                )
            }
            MatrizError::StructuralLimit { message } => {
                write!(f, "structural limit: {message}")
            }
            MatrizError::Parse { message } => write!(f, "parse error: {message}"),
            MatrizError::Unsupported { operation } => {
                write!(f, "operation not supported: {operation}")
            }
            MatrizError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

/// Convenience Result type for matriz operations.
pub type Result<T> = std::result::Result<T, MatrizError>;
