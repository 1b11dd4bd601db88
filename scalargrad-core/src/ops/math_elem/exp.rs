use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;

/// Backward operation context for `exp`.
///
/// d(e^x)/dx = e^x, i.e. the output value itself.
#[derive(Debug)]
struct ExpBackward;

impl BackwardOp for ExpBackward {
    fn backward(&self, children: &[Value], out_data: f64, out_grad: f64) {
        children[0].add_grad(out_data * out_grad);
    }
}

/// Computes `e^a`.
pub fn exp_op(a: &Value) -> Value {
    apply_unary_op(a, f64::exp, Op::Exp, |_, _| Box::new(ExpBackward))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
