// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear functions used by the network layer.
//!
//! - [`tanh_op`](tanh/fn.tanh_op.html): Hyperbolic tangent.
//! - [`relu_op`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;
