//! Core value types (Matrix, text codec).
//!
//! These types are the foundation the solvers and estimators are built on.

mod matrix;
mod text;

pub use matrix::{Matrix, EQUALITY_TOLERANCE};
pub use text::{TextCodec, STD_COL_DELIMITER, STD_ROW_DELIMITER};
