//! Gauss-Jordan inversion with deferred pivoting.
//!
//! Implements the in-place inversion described in Ahmad & Khan (2010),
//! "An Efficient and Simple Algorithm for Matrix Inversion", IJTD 1.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// Threshold below which a pivot is treated as zero.
pub const ZERO_TOLERANCE: f32 = 1e-5;

/// Inverts a square matrix on a private working copy.
///
/// Pivots whose magnitude starts below [`ZERO_TOLERANCE`] are deferred in
/// order of detection and retried after the first pass, once updates from
/// the other pivots may have grown them. This gives the effect of row
/// reordering without physically swapping rows, and the retry order is part
/// of the numerical contract.
///
/// # Errors
///
/// Returns [`MatrizError::NotSquare`] for non-square input and
/// [`MatrizError::Singular`] if a deferred pivot is still below tolerance on
/// retry.
pub fn invert(matrix: &Matrix) -> Result<Matrix> {
    let (rows, cols) = matrix.size();
    if rows != cols {
        return Err(MatrizError::NotSquare { rows, cols });
    }

    let n = rows;
    let mut mat = matrix.as_slice().to_vec();
    let mut deferred = Vec::new();

    for p in 0..n {
        let pivot = mat[p * n + p];
        if pivot.abs() < ZERO_TOLERANCE {
            deferred.push(p);
        } else {
            eliminate(&mut mat, n, p, pivot);
        }
    }

    for &p in &deferred {
        let pivot = mat[p * n + p];
        if pivot.abs() < ZERO_TOLERANCE {
            return Err(MatrizError::Singular { pivot, index: p });
        }
        eliminate(&mut mat, n, p, pivot);
    }

    Matrix::from_vec(n, n, mat)
}

// One elimination step around pivot (p, p). The pivot column is negated and
// scaled first, so the rank-1 update below uses the transformed column.
fn eliminate(mat: &mut [f32], n: usize, p: usize, pivot: f32) {
    for i in 0..n {
        mat[i * n + p] = -mat[i * n + p] / pivot;
    }

    for i in 0..n {
        if i == p {
            continue;
        }
        for j in 0..n {
            if j != p {
                mat[i * n + j] += mat[p * n + j] * mat[i * n + p];
            }
        }
    }

    for j in 0..n {
        mat[p * n + j] /= pivot;
    }
    mat[p * n + p] = 1.0 / pivot;
}

#[cfg(test)]
#[path = "square_tests.rs"]
mod tests;
