//! One-vs-all multiclass classification.

use crate::error::Result;
use crate::estimate::{check_training_shapes, Estimator, LogisticRegression};
use crate::primitives::Matrix;

/// One-vs-all classification over arbitrary `f32` class labels.
///
/// Fitting trains one [`LogisticRegression`] per distinct label against a
/// binarized copy of the label column; prediction picks, for every example,
/// the label whose model reports the highest probability.
#[derive(Debug, Clone)]
pub struct OneVsAll {
    learning_rate: f32,
    l2_penalty: f32,
    iterations: usize,
    models: Vec<(f32, LogisticRegression)>,
}

impl Default for OneVsAll {
    fn default() -> Self {
        Self::new()
    }
}

impl OneVsAll {
    /// Creates a classifier whose per-label models use learning rate 0.01,
    /// no regularization, and 1000 iterations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            learning_rate: 0.01,
            l2_penalty: 0.0,
            iterations: 1000,
            models: Vec::new(),
        }
    }

    /// Sets the gradient descent step size of every per-label model.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the L2 regularization strength of every per-label model.
    #[must_use]
    pub fn with_l2_penalty(mut self, l2_penalty: f32) -> Self {
        self.l2_penalty = l2_penalty;
        self
    }

    /// Sets the number of training iterations of every per-label model.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Returns the distinct labels seen during fitting.
    #[must_use]
    pub fn labels(&self) -> Vec<f32> {
        self.models.iter().map(|(label, _)| *label).collect()
    }

    /// Fraction of examples classified correctly.
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier is unfitted or the shapes are
    /// inconsistent.
    pub fn accuracy(&self, x: &Matrix, y: &Matrix) -> Result<f32> {
        let predictions = self.predict(x)?;
        Ok(predictions.eq_elem(y)?.sum().to_scalar()? / x.rows() as f32)
    }
}

impl Estimator for OneVsAll {
    fn fit(&mut self, x: &Matrix, y: &Matrix) -> Result<()> {
        check_training_shapes(x, y)?;
        self.models.clear();
        for label in y.unique_values() {
            let binarized = y.eq_elem(&Matrix::ones(y.rows(), 1).mul_scalar(label))?;
            let mut model = LogisticRegression::new()
                .with_learning_rate(self.learning_rate)
                .with_l2_penalty(self.l2_penalty)
                .with_iterations(self.iterations);
            model.fit(x, &binarized)?;
            self.models.push((label, model));
        }
        Ok(())
    }

    fn predict(&self, x: &Matrix) -> Result<Matrix> {
        if self.models.is_empty() {
            return Err(crate::estimate::unfitted());
        }
        let mut labels = Vec::with_capacity(x.rows());
        for i in 0..x.rows() {
            let example = x.row(i)?;
            let mut best_probability = 0.0;
            let mut best_label = 0.0;
            for (label, model) in &self.models {
                let probability = model.predict(&example)?.to_scalar()?;
                if probability > best_probability {
                    best_probability = probability;
                    best_label = *label;
                }
            }
            labels.push(best_label);
        }
        Matrix::from_vec(x.rows(), 1, labels)
    }
}
