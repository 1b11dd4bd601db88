use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;

/// Backward operation context for `tanh`, holding the output `t`.
#[derive(Debug)]
struct TanhBackward {
    t: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, children: &[Value], _out_data: f64, out_grad: f64) {
        children[0].add_grad((1.0 - self.t * self.t) * out_grad);
    }
}

/// Computes the hyperbolic tangent as `(e^(2a) - 1) / (e^(2a) + 1)`.
///
/// The explicit formula overflows for large positive inputs (around
/// `a > 355`), giving NaN. This is not clamped.
pub fn tanh_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        |x| {
            let e2x = (2.0 * x).exp();
            (e2x - 1.0) / (e2x + 1.0)
        },
        Op::Tanh,
        |_, t| Box::new(TanhBackward { t }),
    )
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
