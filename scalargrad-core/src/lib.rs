//! # scalargrad-core
//!
//! A scalar-valued reverse-mode automatic differentiation engine, with a
//! small feed-forward network library built on top of it.
//!
//! Every [`Value`] is one node of a directed acyclic computation graph.
//! Arithmetic on values builds the graph eagerly; [`Value::backward`]
//! then fills in the gradient of the output with respect to every node
//! it depends on.

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod value;
pub mod value_data;

pub use autograd::{backward, BackwardOp};
pub use error::ScalarGradError;
pub use value::{NodeId, Value};
pub use value_data::Op;
// Re-export traits required by public functions/structs
pub use num_traits;
