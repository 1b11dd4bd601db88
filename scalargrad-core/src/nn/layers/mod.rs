// src/nn/layers/mod.rs
// Building blocks of the feed-forward network: Neuron -> Layer -> Mlp.

pub mod layer;
pub mod mlp;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::Neuron;
