//! Moore-Penrose pseudo-inverse via rank-revealing Cholesky (geninv).
//!
//! Implements the algorithm of Courrieu (2008), "Fast Computation of
//! Moore-Penrose Inverse Matrices", Neural Information Processing - Letters
//! and Reviews 8.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;
use crate::solve::square;

// Scale factor applied to the smallest positive Gram diagonal entry to get
// the rank-truncation tolerance.
const TOLERANCE_FACTOR: f32 = 1e-8;

/// Computes the Moore-Penrose pseudo-inverse of an m x n matrix of any
/// rank; the result is n x m.
///
/// The Gram matrix of the smaller side is factored into a lower-triangular
/// `L` column by column; columns whose diagonal candidate falls below a
/// data-dependent tolerance are discarded, which reveals the numerical rank.
/// The pseudo-inverse is then assembled from `L` and the inverse of
/// `L^T * L`.
///
/// For full-rank input this is the exact Moore-Penrose inverse; for
/// rank-deficient input it is the least-norm/least-squares generalized
/// inverse.
///
/// # Errors
///
/// Returns [`MatrizError::Singular`] if the Gram matrix has no numerically
/// positive diagonal entry (rank-zero input).
pub fn pseudo_invert(matrix: &Matrix) -> Result<Matrix> {
    let transposed = matrix.rows() < matrix.cols();
    let gram = if transposed {
        matrix.mul(&matrix.transpose())?
    } else {
        matrix.transpose().mul(matrix)?
    };
    let n = gram.rows();
    let a = gram.as_slice();

    let mut smallest_positive = f32::INFINITY;
    for i in 0..n {
        let d = a[i * n + i];
        if d > 0.0 && d < smallest_positive {
            smallest_positive = d;
        }
    }
    if !smallest_positive.is_finite() {
        return Err(MatrizError::Singular {
            pivot: 0.0,
            index: 0,
        });
    }
    let tol = smallest_positive * TOLERANCE_FACTOR;

    // Lower factor built column by column; r is the running rank. A column
    // candidate lives in column r until accepted or zeroed back out.
    let mut l = vec![0.0f32; n * n];
    let mut r = 0usize;
    for k in 0..n {
        for i in k..n {
            let mut value = a[i * n + k];
            for q in 0..r {
                value -= l[i * n + q] * l[k * n + q];
            }
            l[i * n + r] = value;
        }
        if l[k * n + r] > tol {
            let root = l[k * n + r].sqrt();
            l[k * n + r] = root;
            for i in k + 1..n {
                l[i * n + r] /= root;
            }
            r += 1;
        } else {
            for i in k..n {
                l[i * n + r] = 0.0;
            }
        }
    }
    if r == 0 {
        return Err(MatrizError::Singular {
            pivot: 0.0,
            index: 0,
        });
    }

    // Truncate L to its first r columns (the effective rank).
    let mut truncated = Vec::with_capacity(n * r);
    for i in 0..n {
        truncated.extend_from_slice(&l[i * n..i * n + r]);
    }
    let l = Matrix::from_vec(n, r, truncated)?;

    let m = square::invert(&l.transpose().mul(&l)?)?;
    if transposed {
        matrix
            .transpose()
            .mul(&l)?
            .mul(&m)?
            .mul(&m)?
            .mul(&l.transpose())
    } else {
        l.mul(&m)?.mul(&m)?.mul(&l.transpose())?.mul(&matrix.transpose())
    }
}

#[cfg(test)]
#[path = "pseudo_tests.rs"]
mod tests;
