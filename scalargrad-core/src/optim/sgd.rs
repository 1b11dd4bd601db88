use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Implements plain Stochastic Gradient Descent: `p.data -= lr * p.grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    ///
    /// * `params`: Handles to the parameter nodes to update, usually
    ///   `model.parameters()`.
    /// * `lr`: The learning rate.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InvalidConfig` if `lr` is negative or not finite.
    pub fn new(params: Vec<Value>, lr: f64) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        Ok(Sgd { params, lr })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

fn validate_lr(lr: f64) -> Result<(), ScalarGradError> {
    if !lr.is_finite() || lr < 0.0 {
        return Err(ScalarGradError::InvalidConfig(format!(
            "Invalid learning rate: {}",
            lr
        )));
    }
    Ok(())
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        log::debug!(
            "Sgd::step: updating {} parameters with lr={}",
            self.params.len(),
            self.lr
        );
        for param in &self.params {
            let mut node = param.write_data();
            let grad = node.grad;
            node.data -= self.lr * grad;
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
