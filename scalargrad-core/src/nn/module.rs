use std::fmt::Debug;

use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all network modules (single neurons, layers, whole
/// networks).
///
/// A module exposes exactly two capabilities: producing outputs from inputs
/// and enumerating its trainable parameters. Containers implement both by
/// delegating to the modules they hold.
pub trait Module: Debug {
    /// Performs a forward pass, building a fresh graph on top of `inputs`
    /// and the module's parameter nodes.
    ///
    /// # Errors
    /// Returns `ScalarGradError::ShapeMismatch` if the number of inputs does
    /// not match what the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns handles to all trainable leaf nodes of the module.
    ///
    /// The handles share the module's nodes: updating their `data` updates
    /// the module.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to zero.
    ///
    /// Must run before each backward pass, otherwise gradients of successive
    /// iterations add up.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock Module pour les tests
    #[derive(Debug)]
    struct MockModule {
        param: Value,
    }

    impl Module for MockModule {
        fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
            Ok(inputs.iter().map(|x| x * &self.param).collect())
        }

        fn parameters(&self) -> Vec<Value> {
            vec![self.param.clone()]
        }
    }

    #[test]
    fn test_module_parameters_share_nodes() {
        let module = MockModule {
            param: Value::new(2.0),
        };
        let params = module.parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(module.num_parameters(), 1);
        params[0].set_data(5.0);
        assert_eq!(module.param.data(), 5.0);
    }

    #[test]
    fn test_module_zero_grad() -> Result<(), ScalarGradError> {
        let module = MockModule {
            param: Value::new(2.0),
        };
        let out = module.forward(&[Value::new(3.0)])?;
        out[0].backward();
        assert_eq!(module.param.grad(), 3.0);
        module.zero_grad();
        assert_eq!(module.param.grad(), 0.0);
        Ok(())
    }
}
