use std::fmt;

use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;

/// Multi-layer perceptron: a sequence of layers, every one of them `tanh`
/// except the last, which is linear.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network taking `nin` inputs, with one layer per entry of
    /// `nouts` giving its width.
    pub fn new(nin: usize, nouts: &[usize]) -> Self {
        Self::with_rng(nin, nouts, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nouts: &[usize], rng: &mut R) -> Self {
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);

        let layers = (0..nouts.len())
            .map(|i| {
                let is_output_layer = i == nouts.len() - 1;
                Layer::with_rng(sizes[i], sizes[i + 1], !is_output_layer, rng)
            })
            .collect();
        Mlp { layers }
    }

    pub fn from_layers(layers: Vec<Layer>) -> Self {
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut out = inputs.to_vec();
        for layer in &self.layers {
            out = layer.forward(&out)?;
        }
        Ok(out)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [ ")?;
        for layer in &self.layers {
            write!(f, "{} ", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
