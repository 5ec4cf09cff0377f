//! Logistic regression trained by batch gradient descent.

use crate::error::{MatrizError, Result};
use crate::estimate::{check_training_shapes, reg_cost, reg_vector, unfitted, Estimator};
use crate::primitives::Matrix;

/// Binary logistic regression with an intercept term and optional L2
/// regularization.
///
/// Labels must be an mx1 column of 0s and 1s. [`Estimator::predict`]
/// returns class probabilities; [`LogisticRegression::predict_binary`]
/// thresholds them at 0.5.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    theta: Option<Matrix>,
    learning_rate: f32,
    l2_penalty: f32,
    iterations: usize,
    cost_history: Vec<f32>,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LogisticRegression {
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

    /// Predicts hard 0/1 classes at a 0.5 probability threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the example width does
    /// not match the training data.
    pub fn predict_binary(&self, x: &Matrix) -> Result<Matrix> {
        Ok(self.predict(x)?.map(threshold))
    }

    /// Fraction of predicted positives that are labeled positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the shapes are
    /// inconsistent.
    pub fn precision(&self, x: &Matrix, y: &Matrix) -> Result<f32> {
        let binary = self.predict_binary(x)?;
        let true_positives = binary.mul_elem(y)?.sum().to_scalar()?;
        let false_positives = binary
            .mul_elem(&y.mask(|v| v == 0.0))?
            .sum()
            .to_scalar()?;
        Ok(true_positives / (true_positives + false_positives))
    }

    /// Fraction of labeled positives that are predicted positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the shapes are
    /// inconsistent.
    pub fn recall(&self, x: &Matrix, y: &Matrix) -> Result<f32> {
        let binary = self.predict_binary(x)?;
        let true_positives = binary.mul_elem(y)?.sum().to_scalar()?;
        let false_negatives = binary
            .mask(|v| v == 0.0)
            .mul_elem(y)?
            .sum()
            .to_scalar()?;
        Ok(true_positives / (true_positives + false_negatives))
    }

    /// Harmonic mean of precision and recall.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the shapes are
    /// inconsistent.
    pub fn f1_score(&self, x: &Matrix, y: &Matrix) -> Result<f32> {
        let precision = self.precision(x, y)?;
        let recall = self.recall(x, y)?;
        Ok(2.0 * precision * recall / (precision + recall))
    }

    /// Fraction of examples classified correctly.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the shapes are
    /// inconsistent.
    pub fn accuracy(&self, x: &Matrix, y: &Matrix) -> Result<f32> {
        let binary = self.predict_binary(x)?;
        Ok(binary.eq_elem(y)?.sum().to_scalar()? / x.rows() as f32)
    }

    /// Cross-entropy cost plus the regularization term.
    fn cost(&self, design: &Matrix, y: &Matrix, theta: &Matrix) -> Result<f32> {
        let m = design.rows() as f32;
        let h = design.mul(theta)?.sigmoid();
        let positive_term = y.transpose().mul(&h.ln())?;
        let negative_term = Matrix::scalar(1.0)
            .sub(y)?
            .transpose()
            .mul(&Matrix::scalar(1.0).sub(&h)?.ln())?;
        let likelihood = positive_term.add(&negative_term)?.to_scalar()?;
        Ok(-likelihood / m + reg_cost(theta, self.l2_penalty)?)
    }

    fn gradient(&self, design: &Matrix, y: &Matrix, theta: &Matrix) -> Result<Matrix> {
        let m = design.rows() as f32;
        let residual = design.mul(theta)?.sigmoid().sub(y)?;
        Ok(design
            .transpose()
            .mul(&residual)?
            .add(&reg_vector(theta, self.l2_penalty)?)?
            .div_scalar(m))
    }
}

impl Estimator for LogisticRegression {
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
        Ok(design.mul(theta)?.sigmoid())
    }
}

fn threshold(probability: f32) -> f32 {
    if probability < 0.5 {
        0.0
    } else {
        1.0
    }
}
