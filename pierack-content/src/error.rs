//! Error types for the content engine

use thiserror::Error;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors that can occur in content operations
#[derive(Debug, Error)]
pub enum ContentError {
    /// Pie not found
    #[error("pie not found: {id}")]
    PieNotFound { id: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Lock is held by another process
    #[error("lock busy - another operation in progress")]
    LockBusy,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContentError {
    /// Create a not-found error for a pie ID
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::PieNotFound { id: id.into() }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockBusy)
    }
}
