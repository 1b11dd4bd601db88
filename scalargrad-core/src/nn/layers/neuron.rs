use std::fmt;

use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;

/// A single unit: `act = bias + sum(w_i * x_i)`, followed by `tanh` when
/// `nonlin` is set.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlin: bool,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn uniformly from `[-1, 1]`
    /// and a zero bias.
    pub fn new(nin: usize, nonlin: bool) -> Self {
        Self::with_rng(nin, nonlin, &mut rand::thread_rng())
    }

    /// Same as [`Neuron::new`] with a caller-provided random generator.
    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nonlin: bool, rng: &mut R) -> Self {
        Neuron {
            weights: init::uniform(nin, -1.0, 1.0, rng),
            bias: Value::new(0.0),
            nonlin,
        }
    }

    /// Creates a neuron with the given weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64, nonlin: bool) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Value::new(w)).collect(),
            bias: Value::new(bias),
            nonlin,
        }
    }

    /// Number of inputs the neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlin
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Computes the neuron's output node for `inputs`.
    ///
    /// # Errors
    /// Returns `ScalarGradError::ShapeMismatch` if `inputs.len()` differs
    /// from the number of weights. Inputs are never truncated or padded.
    pub fn call(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::call".to_string(),
            });
        }

        let mut act = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs.iter()) {
            act = &act + &(w * x);
        }

        Ok(if self.nonlin { act.tanh() } else { act })
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.call(inputs)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.extend(self.weights.iter().cloned());
        params.push(self.bias.clone());
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlin { "tanh" } else { "linear" };
        write!(f, "{} Neuron({})", kind, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
