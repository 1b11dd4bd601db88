// src/value/traits.rs

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};
use std::rc::Rc;

use num_traits::{One, Zero};

use crate::ops::arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, scalar_div_op,
    scalar_sub_op, sub_op, sub_scalar_op,
};
use crate::value::Value;

// --- Trait Implementations ---

impl Clone for Value {
    /// Shallow clone: the returned handle points to the same node.
    fn clone(&self) -> Self {
        Value {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(guard) => write!(
                f,
                "Value(data={}, grad={}, op='{}')",
                guard.data, guard.grad, guard.op
            ),
            Err(_) => write!(f, "Value(<borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value({}), op='{}'", guard.data, guard.op)
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }
}

impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| &acc + &v)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| &acc + v)
    }
}

impl Product for Value {
    fn product<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::one(), |acc, v| &acc * &v)
    }
}

impl<'a> Product<&'a Value> for Value {
    fn product<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::one(), |acc, v| &acc * v)
    }
}

// --- Operator overloads ---
//
// Every binary operator accepts node/node, node/constant and constant/node
// operands, with nodes by value or by reference. Constants never become
// graph nodes.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $node_node:ident, $node_scalar:ident, $scalar_node:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $node_node(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $node_node(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $node_node(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $node_node(self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $node_scalar(self, rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $node_scalar(&self, rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $scalar_node(self, rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $scalar_node(self, &rhs)
            }
        }
    };
}

fn scalar_add_op(lhs: f64, rhs: &Value) -> Value {
    add_scalar_op(rhs, lhs)
}

fn scalar_mul_op(lhs: f64, rhs: &Value) -> Value {
    mul_scalar_op(rhs, lhs)
}

impl_binary_op!(Add, add, add_op, add_scalar_op, scalar_add_op);
impl_binary_op!(Sub, sub, sub_op, sub_scalar_op, scalar_sub_op);
impl_binary_op!(Mul, mul, mul_op, mul_scalar_op, scalar_mul_op);
impl_binary_op!(Div, div, div_op, div_scalar_op, scalar_div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl AddAssign<&Value> for Value {
    /// Rebinds `self` to a new `self + rhs` node. The previous node is not
    /// modified; it becomes a child of the new one.
    fn add_assign(&mut self, rhs: &Value) {
        *self = add_op(self, rhs);
    }
}

impl AddAssign<Value> for Value {
    fn add_assign(&mut self, rhs: Value) {
        *self = add_op(self, &rhs);
    }
}

impl AddAssign<f64> for Value {
    fn add_assign(&mut self, rhs: f64) {
        *self = add_scalar_op(self, rhs);
    }
}
