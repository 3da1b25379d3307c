use field_path::FieldPathError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecoratorError {
    /// The wrapped value exposes no operation under this name.
    #[error("no such operation: {operation}")]
    OperationNotFound { operation: String },
    /// The operation exists but failed.
    #[error("operation {operation} failed: {message}")]
    Operation { operation: String, message: String },
    #[error(transparent)]
    Path(#[from] FieldPathError),
}

impl DecoratorError {
    pub fn not_found(operation: impl Into<String>) -> Self {
        Self::OperationNotFound {
            operation: operation.into(),
        }
    }

    pub fn operation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Operation {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
