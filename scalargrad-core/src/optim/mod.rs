// src/optim/mod.rs

//! Optimizers for training networks.
//!
//! This module provides the `Optimizer` trait and plain stochastic gradient
//! descent. Optimizers hold handles to the shared parameter nodes and update
//! them in place.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
