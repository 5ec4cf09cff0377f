//! Matrix inversion routines.
//!
//! [`invert`] handles square matrices with a Gauss-Jordan variant that
//! defers near-zero pivots; [`pseudo_invert`] computes the Moore-Penrose
//! pseudo-inverse of any matrix through a rank-revealing Cholesky
//! factorization. Both work on private copies and never mutate their input.

mod pseudo;
mod square;

pub use pseudo::pseudo_invert;
pub use square::{invert, ZERO_TOLERANCE};
