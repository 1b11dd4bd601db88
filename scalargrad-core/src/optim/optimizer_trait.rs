use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step, using the gradients accumulated
    /// by the last backward pass.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError` otherwise.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// This is typically called before the backward pass in a new training iteration
    /// to prevent gradients from accumulating across iterations.
    fn zero_grad(&mut self);
}
