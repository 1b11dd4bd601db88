use thiserror::Error;

/// Custom error type for the scalargrad framework.
///
/// Graph construction and the backward pass never fail; these variants cover
/// the network, training and data layers built on top of the engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires at least one element")]
    EmptyInput { operation: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
}

impl From<std::io::Error> for ScalarGradError {
    fn from(err: std::io::Error) -> Self {
        ScalarGradError::Io(err.to_string())
    }
}
