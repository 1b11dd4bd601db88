use crate::error::ScalarGradError;
use crate::nn::losses::{check_lengths, reduce, Reduction};
use crate::value::Value;

/// Squared-error loss between predicted nodes and constant targets.
///
/// With `Reduction::Sum` this is `sum((p_i - y_i)^2)`, accumulated from a
/// `0.0` leaf in sample order. `Reduction::Mean` divides that sum by the
/// number of samples.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node.
    ///
    /// # Errors
    /// * `ShapeMismatch` if `preds` and `targets` differ in length.
    /// * `EmptyInput` for a mean over zero samples. A sum over zero samples
    ///   is the `0.0` leaf.
    pub fn calculate(&self, preds: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        check_lengths(preds.len(), targets.len(), "MSELoss::calculate")?;

        let mut total = Value::new(0.0);
        for (p, &y) in preds.iter().zip(targets.iter()) {
            let diff = p - y;
            total += diff.powf(2.0);
        }

        reduce(total, preds.len(), self.reduction, "MSELoss::calculate")
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
