// src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;
use crate::value_data::Op;

// --- Backward Operation Structures ---

/// Backward operation context for `base ^ constant`.
#[derive(Debug)]
struct PowScalarBackward {
    base_val: f64,
    exponent: f64,
}

impl BackwardOp for PowScalarBackward {
    fn backward(&self, children: &[Value], _out_data: f64, out_grad: f64) {
        let local = self.exponent * self.base_val.powf(self.exponent - 1.0);
        children[0].add_grad(local * out_grad);
    }
}

/// Backward operation context for `base ^ exponent` with both sides nodes.
///
/// The exponent's rule uses `ln(base)`, which is only defined for a
/// positive base. A zero or negative base yields NaN (or infinity) in the
/// exponent's gradient; this is left to floating-point semantics.
#[derive(Debug)]
struct PowBackward {
    base_val: f64,
    exponent_val: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, children: &[Value], out_data: f64, out_grad: f64) {
        let x = self.base_val;
        let y = self.exponent_val;
        // d(x^y)/dx = y * x^(y-1)
        children[0].add_grad(y * x.powf(y - 1.0) * out_grad);
        // d(x^y)/dy = x^y * ln(x)
        children[1].add_grad(out_data * x.ln() * out_grad);
    }
}

// --- Forward Operations ---

/// Raises a node to a constant power.
pub fn pow_scalar_op(base: &Value, exponent: f64) -> Value {
    apply_unary_op(base, |x| x.powf(exponent), Op::Pow, |base_val, _| {
        Box::new(PowScalarBackward { base_val, exponent })
    })
}

/// Raises a node to the power of another node.
///
/// Differentiates with respect to both the base and the exponent.
pub fn pow_op(base: &Value, exponent: &Value) -> Value {
    let base_val = base.data();
    let exponent_val = exponent.data();
    Value::from_op(
        base_val.powf(exponent_val),
        vec![base.clone(), exponent.clone()],
        Op::Pow,
        Box::new(PowBackward {
            base_val,
            exponent_val,
        }),
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
