use crate::error::ScalarGradError;
use crate::nn::losses::{check_lengths, reduce, Reduction};
use crate::value::Value;

/// Max-margin loss for `+1` / `-1` labels: `relu(1 - y_i * p_i)` per sample.
#[derive(Debug, Clone, Default)]
pub struct HingeLoss {
    reduction: Reduction,
}

impl HingeLoss {
    pub fn new(reduction: Reduction) -> Self {
        HingeLoss { reduction }
    }

    /// Builds the loss node. Same error cases as `MSELoss::calculate`.
    pub fn calculate(&self, preds: &[Value], labels: &[f64]) -> Result<Value, ScalarGradError> {
        check_lengths(preds.len(), labels.len(), "HingeLoss::calculate")?;

        let mut total = Value::new(0.0);
        for (p, &y) in preds.iter().zip(labels.iter()) {
            total += (1.0 - p * y).relu();
        }

        reduce(total, preds.len(), self.reduction, "HingeLoss::calculate")
    }
}
