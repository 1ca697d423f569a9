/// Errors raised when turning operation names and arguments into typed values.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum OperationError {
    /// The operation name is not known.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The filter name is not known.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// The color transform name is not known.
    #[error("Unknown color transform: {0}")]
    UnknownTransform(String),

    /// The flip direction is not known.
    #[error("Unknown flip direction: {0}")]
    UnknownFlip(String),

    /// The operation expects an argument that was not given.
    #[error("Operation {0} expects an argument")]
    MissingArgument(String),

    /// The brightness constant is not an integer.
    #[error("Constant must be an integer, got {0}")]
    InvalidConstant(String),
}
