// src/nn/mod.rs
// Feed-forward network layer built on top of the scalar engine.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{HingeLoss, MSELoss, Reduction};
pub use module::Module;
