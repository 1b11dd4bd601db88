use crate::ops::arithmetic::mul::{mul_op, mul_scalar_op};
use crate::ops::arithmetic::pow::pow_scalar_op;
use crate::value::Value;

/// Divides two nodes, expressed as `a * b^-1`.
///
/// A zero-valued divisor is not checked and yields infinities or NaN.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_scalar_op(b, -1.0))
}

/// Divides a node by a constant, expressed as `a * (1 / scalar)`.
pub fn div_scalar_op(a: &Value, scalar: f64) -> Value {
    mul_scalar_op(a, 1.0 / scalar)
}

/// Divides a constant by a node, expressed as `b^-1 * scalar`.
pub fn scalar_div_op(scalar: f64, b: &Value) -> Value {
    mul_scalar_op(&pow_scalar_op(b, -1.0), scalar)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
