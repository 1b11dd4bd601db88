use std::fmt::Debug;

use crate::value::Value;

/// Defines the local-gradient rule of a differentiable operation.
///
/// Every operator that creates a non-leaf `Value` stores an implementation
/// of this trait in the output node. During [`crate::autograd::backward`]
/// the rule is invoked once, after every consumer of the node has already
/// added its contribution to the node's gradient.
///
/// Operand values needed by the rule (e.g. the other factor of a product)
/// are copied into the implementing struct when the node is built. The rule
/// must not read them back from the children, whose `data` may have been
/// overwritten by a parameter update in the meantime.
///
/// Implementations receive everything about the output node as arguments,
/// so they never hold a handle to the node that owns them.
pub trait BackwardOp: Debug {
    /// Adds `d(out)/d(child) * out_grad` to the gradient of each child.
    ///
    /// # Arguments
    /// * `children`: the inputs recorded on the output node, in operand order.
    /// * `out_data`: the output node's value.
    /// * `out_grad`: the gradient accumulated so far on the output node.
    fn backward(&self, children: &[Value], out_data: f64, out_grad: f64);
}
