// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WellError>;

#[derive(Error, Debug)]
pub enum WellError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Model request failed: {0}")]
    Model(String),

    #[error("Model reply did not match the expected schema: {0}")]
    Schema(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WellError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        WellError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True for failures of the external model call or of its reply.
    pub fn is_upstream(&self) -> bool {
        matches!(self, WellError::Model(_) | WellError::Schema(_))
    }
}
