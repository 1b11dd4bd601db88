use crate::ops::arithmetic::add::{add_op, add_scalar_op};
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;

/// Subtracts two nodes, expressed as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

/// Subtracts a constant from a node, expressed as `a + (-scalar)`.
pub fn sub_scalar_op(a: &Value, scalar: f64) -> Value {
    add_scalar_op(a, -scalar)
}

/// Subtracts a node from a constant, expressed as `scalar + (-a)`.
pub fn scalar_sub_op(scalar: f64, a: &Value) -> Value {
    add_scalar_op(&neg_op(a), scalar)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
