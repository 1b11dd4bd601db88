// src/train.rs

//! Full-batch training loop: forward every sample, squared-error loss,
//! zero-grad, backward, SGD update.

use crate::error::ScalarGradError;
use crate::nn::losses::{MSELoss, Reduction};
use crate::nn::module::Module;
use crate::optim::{Optimizer, Sgd};
use crate::value::Value;

/// Hyperparameters of [`Trainer::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// Log the loss every `log_every` epochs (and always on the last one).
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 25,
            learning_rate: 0.05,
            log_every: 1,
        }
    }
}

impl TrainConfig {
    /// # Errors
    /// `InvalidConfig` on zero epochs, a zero logging interval, or a negative
    /// or non-finite learning rate.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "epochs must be at least 1".to_string(),
            ));
        }
        if self.log_every == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "log_every must be at least 1".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "Invalid learning rate: {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

/// Loss recorded after each epoch's forward pass, before its update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    pub losses: Vec<f64>,
}

impl TrainReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Self {
        Trainer { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Trains `model` on `(xs, ys)` with full-batch gradient descent.
    ///
    /// Every epoch builds a fresh graph over the model's persistent
    /// parameter nodes; the previous epoch's graph is released once its
    /// loss node is dropped.
    ///
    /// # Errors
    /// * `InvalidConfig` if the configuration does not validate.
    /// * `EmptyInput` if there are no samples.
    /// * `ShapeMismatch` if `xs` and `ys` differ in length or a sample does
    ///   not fit the model.
    pub fn fit<M: Module>(
        &self,
        model: &M,
        xs: &[Vec<Value>],
        ys: &[f64],
    ) -> Result<TrainReport, ScalarGradError> {
        self.config.validate()?;
        check_samples(xs, ys, "Trainer::fit")?;

        let mut optimizer = Sgd::new(model.parameters(), self.config.learning_rate)?;
        let loss_fn = MSELoss::new(Reduction::Sum);
        let mut report = TrainReport {
            losses: Vec::with_capacity(self.config.epochs),
        };

        log::info!(
            "Training {} parameters on {} samples for {} epochs (lr={})",
            model.num_parameters(),
            xs.len(),
            self.config.epochs,
            self.config.learning_rate
        );

        for epoch in 0..self.config.epochs {
            let preds = predict_all(model, xs)?;
            let loss = loss_fn.calculate(&preds, ys)?;

            optimizer.zero_grad();
            loss.backward();
            optimizer.step()?;

            let loss_value = loss.data();
            report.losses.push(loss_value);
            if epoch % self.config.log_every == 0 || epoch + 1 == self.config.epochs {
                log::info!("epoch {} loss {}", epoch, loss_value);
            }
        }

        Ok(report)
    }
}

/// Fraction of samples whose prediction has the same sign as the label.
///
/// A sample counts as positive when its value is strictly greater than zero.
pub fn accuracy<M: Module>(model: &M, xs: &[Vec<Value>], ys: &[f64]) -> Result<f64, ScalarGradError> {
    check_samples(xs, ys, "accuracy")?;
    let preds = predict_all(model, xs)?;
    let correct = preds
        .iter()
        .zip(ys.iter())
        .filter(|&(p, &y)| (p.data() > 0.0) == (y > 0.0))
        .count();
    Ok(correct as f64 / xs.len() as f64)
}

fn check_samples(xs: &[Vec<Value>], ys: &[f64], operation: &str) -> Result<(), ScalarGradError> {
    if xs.len() != ys.len() {
        return Err(ScalarGradError::ShapeMismatch {
            expected: xs.len(),
            actual: ys.len(),
            operation: operation.to_string(),
        });
    }
    if xs.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// First output of the model for every sample.
fn predict_all<M: Module>(model: &M, xs: &[Vec<Value>]) -> Result<Vec<Value>, ScalarGradError> {
    xs.iter()
        .map(|x| {
            model
                .forward(x)?
                .into_iter()
                .next()
                .ok_or_else(|| ScalarGradError::EmptyInput {
                    operation: "Module::forward".to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
