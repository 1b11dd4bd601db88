use std::fmt;

use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;

/// A layer of independent neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `nout` neurons with `nin` inputs each.
    pub fn new(nin: usize, nout: usize, nonlin: bool) -> Self {
        Self::with_rng(nin, nout, nonlin, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nout: usize, nonlin: bool, rng: &mut R) -> Self {
        Layer {
            neurons: (0..nout).map(|_| Neuron::with_rng(nin, nonlin, rng)).collect(),
        }
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Number of outputs.
    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons.iter().map(|n| n.call(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [ ")?;
        for neuron in &self.neurons {
            write!(f, "{} ", neuron)?;
        }
        write!(f, "]")
    }
}
