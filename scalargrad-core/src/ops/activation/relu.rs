use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;

/// Backward operation context for `relu`.
///
/// Passes the gradient through only where the output is strictly positive,
/// so the gradient at exactly zero is 0.
#[derive(Debug)]
struct ReluBackward;

impl BackwardOp for ReluBackward {
    fn backward(&self, children: &[Value], out_data: f64, out_grad: f64) {
        let local = if out_data > 0.0 { 1.0 } else { 0.0 };
        children[0].add_grad(local * out_grad);
    }
}

/// Computes `max(a, 0)`.
pub fn relu_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        |x| if x < 0.0 { 0.0 } else { x },
        Op::Relu,
        |_, _| Box::new(ReluBackward),
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
