use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;

// --- Backward Operation Structures ---

/// Backward operation context for node + node.
///
/// d(a+b)/da = d(a+b)/db = 1: both inputs receive the output gradient as is.
#[derive(Debug)]
struct AddBackward;

impl BackwardOp for AddBackward {
    fn backward(&self, children: &[Value], _out_data: f64, out_grad: f64) {
        children[0].add_grad(out_grad);
        children[1].add_grad(out_grad);
    }
}

/// Backward operation context for node + constant. The constant is not a
/// graph node and receives nothing.
#[derive(Debug)]
struct AddScalarBackward;

impl BackwardOp for AddScalarBackward {
    fn backward(&self, children: &[Value], _out_data: f64, out_grad: f64) {
        children[0].add_grad(out_grad);
    }
}

// --- Forward Operations ---

/// Adds two nodes.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() + b.data(),
        vec![a.clone(), b.clone()],
        Op::Add,
        Box::new(AddBackward),
    )
}

/// Adds a constant to a node. Also serves `constant + node`.
pub fn add_scalar_op(a: &Value, scalar: f64) -> Value {
    apply_unary_op(a, |x| x + scalar, Op::Add, |_, _| Box::new(AddScalarBackward))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
