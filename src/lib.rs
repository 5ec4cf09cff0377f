//! Matriz: dense, immutable, single-precision matrix algebra in pure Rust.
//!
//! The crate centers on one value type, [`primitives::Matrix`]: a row-major
//! grid of `f32` where every operation returns a freshly allocated result.
//! On top of it sit two numerical routines, Gauss-Jordan inversion with
//! deferred pivoting and a Cholesky-based Moore-Penrose pseudo-inverse,
//! plus a small set of regression estimators that consume the matrix API.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::parse("0 1 -2;3 4 5;6 7 8").expect("well-formed text");
//! let inv = a.inv().expect("invertible");
//! assert!(a.mul(&inv).expect("compatible shapes").approx_eq(&Matrix::identity(3), 1e-3));
//!
//! // Rectangular matrices get a Moore-Penrose pseudo-inverse instead.
//! let b = Matrix::parse("1 2;3 4;5 6").expect("well-formed text");
//! let pinv = b.pinv().expect("numerically rank-positive");
//! assert_eq!(pinv.size(), (2, 3));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the Matrix value type and delimited-text codec
//! - [`solve`]: square inversion and the pseudo-inverse
//! - [`estimate`]: linear/logistic regression and one-vs-all classification
//! - [`error`]: the crate error type and Result alias

pub mod error;
pub mod estimate;
pub mod prelude;
pub mod primitives;
pub mod solve;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, TextCodec};
