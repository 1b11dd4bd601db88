use thiserror::Error;

use crate::value::Value;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Invalid epsilon {0:?}: must be finite and strictly positive")]
    InvalidEpsilon(f64),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a graph from leaf values and returns its output node. It is
/// called once on leaves holding `inputs` for the analytical pass, then twice
/// per input on fresh leaves shifted by `+epsilon` / `-epsilon`.
///
/// A gradient passes when `|analytical - numerical| <= abs_tolerance +
/// rel_tolerance * |numerical|`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();

    let evaluate = |shifted: &[f64]| -> f64 {
        let leaves: Vec<Value> = shifted.iter().map(|&x| Value::new(x)).collect();
        func(&leaves).data()
    };

    // --- Numerical gradients ---
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[input_index] = inputs[input_index] + epsilon;
        let loss_plus = evaluate(&shifted);
        shifted[input_index] = inputs[input_index] - epsilon;
        let loss_minus = evaluate(&shifted);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > abs_tolerance + rel_tolerance * numerical_grad.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
