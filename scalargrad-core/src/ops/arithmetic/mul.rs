use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;

// --- Backward Operation Structures ---

/// Backward operation context for node * node.
///
/// Holds copies of both operand values taken when the product was built.
#[derive(Debug)]
struct MulBackward {
    a_val: f64,
    b_val: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, children: &[Value], _out_data: f64, out_grad: f64) {
        // grad_a = grad_output * b
        children[0].add_grad(self.b_val * out_grad);
        // grad_b = grad_output * a
        children[1].add_grad(self.a_val * out_grad);
    }
}

/// Backward operation context for node * constant.
#[derive(Debug)]
struct MulScalarBackward {
    scalar: f64,
}

impl BackwardOp for MulScalarBackward {
    fn backward(&self, children: &[Value], _out_data: f64, out_grad: f64) {
        children[0].add_grad(self.scalar * out_grad);
    }
}

// --- Forward Operations ---

/// Multiplies two nodes.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let a_val = a.data();
    let b_val = b.data();
    Value::from_op(
        a_val * b_val,
        vec![a.clone(), b.clone()],
        Op::Mul,
        Box::new(MulBackward { a_val, b_val }),
    )
}

/// Multiplies a node by a constant. Also serves `constant * node`.
pub fn mul_scalar_op(a: &Value, scalar: f64) -> Value {
    apply_unary_op(a, |x| x * scalar, Op::Mul, |_, _| {
        Box::new(MulScalarBackward { scalar })
    })
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
