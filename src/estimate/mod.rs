//! Regression estimators built on the matrix engine.
//!
//! These are straightforward consumers of the [`Matrix`](crate::primitives::Matrix)
//! API: linear regression and logistic regression trained by batch gradient
//! descent, and one-vs-all multiclass classification on top of the latter.

mod linear;
mod logistic;
mod one_vs_all;

pub use linear::LinearRegression;
pub use logistic::LogisticRegression;
pub use one_vs_all::OneVsAll;

use crate::error::Result;
use crate::primitives::Matrix;

/// Supervised estimators: fit on a design matrix and an mx1 label column,
/// then predict an output column for new examples.
pub trait Estimator {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if the training data shapes are inconsistent or a
    /// hyperparameter is invalid.
    fn fit(&mut self, x: &Matrix, y: &Matrix) -> Result<()>;

    /// Predicts output values for input examples.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the example width does
    /// not match the training data.
    fn predict(&self, x: &Matrix) -> Result<Matrix>;
}

// Shared fit-time validation: labels must be one column with a label per
// training row.
fn check_training_shapes(x: &Matrix, y: &Matrix) -> Result<()> {
    if y.cols() != 1 || y.rows() != x.rows() {
        return Err(crate::error::MatrizError::ShapeMismatch {
            expected: format!("{}x1 labels", x.rows()),
            actual: format!("{}x{}", y.rows(), y.cols()),
        });
    }
    Ok(())
}

// The L2 penalty vector lambda * [0; theta[1..]]; the intercept row is
// never regularized.
fn reg_vector(theta: &Matrix, l2_penalty: f32) -> Result<Matrix> {
    if l2_penalty == 0.0 || theta.rows() == 1 {
        return Ok(Matrix::zeros(theta.rows(), 1));
    }
    let tail = theta.row_range(1, theta.rows() - 1)?;
    Ok(Matrix::scalar(0.0).concat_v(&tail)?.mul_scalar(l2_penalty))
}

// Regularization cost term: the summed squares of lambda * theta[1..].
fn reg_cost(theta: &Matrix, l2_penalty: f32) -> Result<f32> {
    if l2_penalty == 0.0 || theta.rows() == 1 {
        return Ok(0.0);
    }
    theta
        .row_range(1, theta.rows() - 1)?
        .mul_scalar(l2_penalty)
        .sum_squares()
        .to_scalar()
}

fn unfitted() -> crate::error::MatrizError {
    crate::error::MatrizError::InvalidParameter {
        param: "theta".to_string(),
        value: "unfitted".to_string(),
        constraint: "fit() to be called first".to_string(),
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
