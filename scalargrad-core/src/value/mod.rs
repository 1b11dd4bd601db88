// src/value/mod.rs

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::ops;
use crate::value_data::{Op, ValueData};

mod debug;
mod traits;

/// Identity of a node: the address of its shared cell.
///
/// Two distinct nodes carrying the same number have different ids, which is
/// what the backward traversal keys its visited set on.
pub type NodeId = *const RefCell<ValueData>;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be the input of several parents (and
///     also be held by a parameter list). It stays alive as long as any
///     holder does. Cloning a `Value` is a cheap handle copy, never a deep copy.
/// 2.  **Interior Mutability:** `grad` is accumulated and `data` is updated
///     through shared handles.
///
/// `Value` is `!Send`: a graph belongs to one thread for its
/// whole forward/backward cycle.
pub struct Value {
    pub(crate) inner: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Wraps a raw number into a leaf node.
    ///
    /// No validation is performed; NaN and infinities are accepted as is.
    pub fn new(data: f64) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData::new(data))),
        }
    }

    /// Creates an interior node from an already computed value, its inputs
    /// and the rule distributing its gradient to them.
    ///
    /// This is how every built-in operator allocates its output, and it can
    /// be used to define additional operators outside this crate.
    pub fn from_op(
        data: f64,
        children: Vec<Value>,
        op: Op,
        backward_fn: Box<dyn BackwardOp>,
    ) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData::new_op(
                data,
                children,
                op,
                backward_fn,
            ))),
        }
    }

    /// Current scalar value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the scalar value in place.
    ///
    /// Rules of graphs built earlier keep the operand values they captured,
    /// so update parameters only after the matching backward pass.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` to the accumulated gradient.
    ///
    /// Backward rules must use this (never `set_grad`): a node reached along
    /// several paths receives one contribution per path.
    pub fn add_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Direct inputs of this node, in operand order.
    pub fn children(&self) -> Vec<Value> {
        self.read_data().children.clone()
    }

    pub fn op(&self) -> Op {
        self.read_data().op
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the identity of the node.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.inner)
    }

    /// `true` if both handles point to the same node.
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Acquires a shared borrow of the node's payload.
    ///
    /// Panics if the payload is mutably borrowed, which cannot happen
    /// outside of a backward rule touching its own node.
    pub fn read_data(&self) -> Ref<'_, ValueData> {
        self.inner.borrow()
    }

    /// Acquires an exclusive borrow of the node's payload.
    pub fn write_data(&self) -> RefMut<'_, ValueData> {
        self.inner.borrow_mut()
    }

    /// Computes the gradient of this node with respect to every node
    /// reachable from it. See [`crate::autograd::backward`].
    pub fn backward(&self) {
        crate::autograd::backward(self);
    }

    // --- Method-call forms of the operators ---

    /// `self ^ exponent`, differentiating with respect to both nodes.
    pub fn pow(&self, exponent: &Value) -> Value {
        ops::pow_op(self, exponent)
    }

    /// `self ^ exponent` for a constant exponent.
    pub fn powf(&self, exponent: f64) -> Value {
        ops::pow_scalar_op(self, exponent)
    }

    pub fn exp(&self) -> Value {
        ops::exp_op(self)
    }

    pub fn tanh(&self) -> Value {
        ops::tanh_op(self)
    }

    pub fn relu(&self) -> Value {
        ops::relu_op(self)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
