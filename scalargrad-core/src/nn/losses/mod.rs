// src/nn/losses/mod.rs

//! Loss functions turning a batch of predictions into a single scalar node
//! from which `backward` can be started.

use std::str::FromStr;

use crate::error::ScalarGradError;
use crate::value::Value;

pub mod hinge;
pub mod mse;

pub use hinge::HingeLoss;
pub use mse::MSELoss;

/// Specifies how per-sample losses are combined: 'mean' | 'sum'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Checks that predictions and targets pair up one to one.
pub(crate) fn check_lengths(
    preds: usize,
    targets: usize,
    operation: &str,
) -> Result<(), ScalarGradError> {
    if preds != targets {
        return Err(ScalarGradError::ShapeMismatch {
            expected: targets,
            actual: preds,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Applies the reduction to a running sum built over `n` samples.
pub(crate) fn reduce(
    total: Value,
    n: usize,
    reduction: Reduction,
    operation: &str,
) -> Result<Value, ScalarGradError> {
    match reduction {
        Reduction::Sum => Ok(total),
        Reduction::Mean => {
            if n == 0 {
                return Err(ScalarGradError::EmptyInput {
                    operation: operation.to_string(),
                });
            }
            Ok(total / n as f64)
        }
    }
}
