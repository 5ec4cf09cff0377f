//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::{MatrizError, Result};
pub use crate::estimate::{Estimator, LinearRegression, LogisticRegression, OneVsAll};
pub use crate::primitives::{Matrix, TextCodec, EQUALITY_TOLERANCE};
