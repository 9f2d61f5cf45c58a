//! Core error types for Phasebook
use thiserror::Error;

/// Result type alias using `PhasebookError`
pub type Result<T> = std::result::Result<T, PhasebookError>;

/// Core error type for Phasebook
///
/// Searching never fails; these errors come from loading a dataset.
#[derive(Error, Debug)]
pub enum PhasebookError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl PhasebookError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
