//! Linear regression trained by batch gradient descent.

use crate::error::{MatrizError, Result};
use crate::estimate::{check_training_shapes, reg_cost, reg_vector, unfitted, Estimator};
use crate::primitives::Matrix;

/// Linear regression with an intercept term and optional L2 regularization.
///
/// A column of ones is prepended to the design matrix before training, so
/// callers pass raw feature columns. Training runs a fixed number of batch
/// gradient descent iterations and records the cost after each one.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// // y = 2x + 1
/// let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).expect("4*1=4 elements");
/// let y = Matrix::from_vec(4, 1, vec![3.0, 5.0, 7.0, 9.0]).expect("4*1=4 elements");
///
/// let mut model = LinearRegression::new().with_learning_rate(0.1).with_iterations(2000);
/// model.fit(&x, &y).expect("consistent shapes");
/// let prediction = model.predict(&Matrix::scalar(5.0)).expect("fitted");
/// assert!((prediction.to_scalar().expect("1x1") - 11.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    theta: Option<Matrix>,
    learning_rate: f32,
    l2_penalty: f32,
    iterations: usize,
    cost_history: Vec<f32>,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Creates a regression with learning rate 0.01, no regularization, and
    /// 1000 iterations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theta: None,
            learning_rate: 0.01,
            l2_penalty: 0.0,
            iterations: 1000,
            cost_history: Vec::new(),
        }
    }

    /// Sets the gradient descent step size.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the L2 regularization strength (0 for none).
    #[must_use]
    pub fn with_l2_penalty(mut self, l2_penalty: f32) -> Self {
        self.l2_penalty = l2_penalty;
        self
    }

    /// Sets the number of gradient descent iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Returns the learned parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidParameter`] if the model is unfitted.
    pub fn theta(&self) -> Result<&Matrix> {
        self.theta.as_ref().ok_or_else(unfitted)
    }

    /// Returns the cost recorded after each training iteration.
    #[must_use]
    pub fn cost_history(&self) -> &[f32] {
        &self.cost_history
    }

    /// Mean squared error cost (halved), including the regularization term.
    fn cost(&self, design: &Matrix, y: &Matrix, theta: &Matrix) -> Result<f32> {
        let m = design.rows() as f32;
        let residual_squares = design.mul(theta)?.sub(y)?.sum_squares().to_scalar()?;
        Ok((residual_squares + reg_cost(theta, self.l2_penalty)?) / (2.0 * m))
    }

    fn gradient(&self, design: &Matrix, y: &Matrix, theta: &Matrix) -> Result<Matrix> {
        let m = design.rows() as f32;
        let residual = design.mul(theta)?.sub(y)?;
        Ok(design
            .transpose()
            .mul(&residual)?
            .add(&reg_vector(theta, self.l2_penalty)?)?
            .div_scalar(m))
    }
}

impl Estimator for LinearRegression {
    fn fit(&mut self, x: &Matrix, y: &Matrix) -> Result<()> {
        check_training_shapes(x, y)?;
        if self.learning_rate <= 0.0 {
            return Err(MatrizError::InvalidParameter {
                param: "learning_rate".to_string(),
                value: self.learning_rate.to_string(),
                constraint: "> 0".to_string(),
            });
        }

        let design = x.prepend_ones_col();
        let mut theta = Matrix::zeros(design.cols(), 1);
        self.cost_history.clear();
        for _ in 0..self.iterations {
            let gradient = self.gradient(&design, y, &theta)?;
            theta = theta.sub(&gradient.mul_scalar(self.learning_rate))?;
            self.cost_history.push(self.cost(&design, y, &theta)?);
        }
        self.theta = Some(theta);
        Ok(())
    }

    fn predict(&self, x: &Matrix) -> Result<Matrix> {
        let theta = self.theta.as_ref().ok_or_else(unfitted)?;
        let design = x.prepend_ones_col();
        if design.cols() != theta.rows() {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{} feature columns", theta.rows() - 1),
                actual: format!("{} feature columns", x.cols()),
            });
        }
        design.mul(theta)
    }
}
