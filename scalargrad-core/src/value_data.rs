// src/value_data.rs
use std::fmt;
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Label of the operation that produced a node.
///
/// Purely diagnostic: the local-gradient rule lives in the node's
/// `backward_fn`, never in this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Op {
    /// Raw input or parameter, created by wrapping a number.
    #[default]
    Leaf,
    Add,
    Mul,
    Pow,
    Exp,
    Tanh,
    Relu,
    /// Operation defined outside this crate through `Value::from_op`.
    Custom(&'static str),
}

impl Op {
    /// Short textual tag as shown in graph dumps (`""` for leaves).
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow => "pow",
            Op::Exp => "exp",
            Op::Tanh => "tanh",
            Op::Relu => "relu",
            Op::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal storage of a single scalar node.
///
/// Wrapped in `Rc<RefCell<ValueData>>` by `Value` so that several parents
/// can share one child and gradients can be accumulated through shared
/// handles.
pub struct ValueData {
    /// Current scalar value. Written at construction, later overwritten in
    /// place only by parameter updates.
    pub(crate) data: f64,
    /// Gradient accumulator. Backward rules only ever add to it.
    pub(crate) grad: f64,
    /// Direct inputs in operand order. Empty for leaves.
    ///
    /// These are the only owning edges of the graph and they always point
    /// from a node to its inputs, so no reference cycle can form.
    pub(crate) children: Vec<Value>,
    pub(crate) op: Op,
    /// Local-gradient rule. `None` for leaves.
    pub(crate) backward_fn: Option<Box<dyn BackwardOp>>,
}

impl ValueData {
    /// Creates the payload of a leaf node: zero gradient, no children, no rule.
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            children: Vec::new(),
            op: Op::Leaf,
            backward_fn: None,
        }
    }

    /// Creates the payload of an interior node produced by `op`.
    pub fn new_op(
        data: f64,
        children: Vec<Value>,
        op: Op,
        backward_fn: Box<dyn BackwardOp>,
    ) -> Self {
        ValueData {
            data,
            grad: 0.0,
            children,
            op,
            backward_fn: Some(backward_fn),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.backward_fn.is_none()
    }

    /// Runs the local-gradient rule, if any, against the current gradient.
    pub(crate) fn run_backward(&self) {
        if let Some(rule) = self.backward_fn.as_ref() {
            rule.backward(&self.children, self.data, self.grad);
        }
    }
}

impl Drop for ValueData {
    /// Releases the inputs iteratively. The default recursive drop would
    /// overflow the stack on long chains of nodes.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(child.inner) {
                let mut data = cell.into_inner();
                pending.append(&mut data.children);
            }
        }
    }
}

impl fmt::Debug for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .field("num_children", &self.children.len())
            .field("backward_fn", &self.backward_fn)
            .finish()
    }
}
