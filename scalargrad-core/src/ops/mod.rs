//! # Scalar Operations Module (`ops`)
//!
//! Graph-building operators. Each one allocates exactly one new `Value`,
//! computes its data eagerly from the operands' current values, records the
//! node-typed operands as children and installs the local-gradient rule.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** every operation has a core function (`add_op`,
//!   `pow_scalar_op`, ...) doing the forward computation and the autograd
//!   setup. The operator overloads and `Value` methods call these.
//! - **`Backward` Structs:** each primitive has a struct (`AddBackward`,
//!   `MulBackward`, ...) implementing [`BackwardOp`]. It holds the operand
//!   snapshots taken during the forward computation.
//! - Composite operations (`neg`, `sub`, `div`) are expressed through the
//!   primitives and have no backward struct of their own.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh, relu.

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, pow_op,
    pow_scalar_op, scalar_div_op, scalar_sub_op, sub_op, sub_scalar_op,
};
pub use math_elem::exp_op;

/// Applies a unary operation to a node.
///
/// Reads the input's current value, computes the output with `forward`,
/// and builds the backward rule from the `(input, output)` snapshot.
///
/// # Arguments
/// * `a`: The input node.
/// * `forward`: The scalar function.
/// * `op`: Tag recorded on the output node.
/// * `backward_builder`: Builds the rule from the input and output values.
pub(crate) fn apply_unary_op<F, B>(a: &Value, forward: F, op: Op, backward_builder: B) -> Value
where
    F: Fn(f64) -> f64,
    B: FnOnce(f64, f64) -> Box<dyn BackwardOp>,
{
    let a_val = a.data();
    let out_val = forward(a_val);
    Value::from_op(out_val, vec![a.clone()], op, backward_builder(a_val, out_val))
}
