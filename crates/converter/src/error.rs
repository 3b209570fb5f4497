//! Error types for the conversion engine

use thiserror::Error;

/// Errors that can occur while loading or converting a collection
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Render the error as the single-key object the external interface
    /// expects: `{"error": "Failed to convert: <message>"}`.
    pub fn to_error_object(&self) -> serde_json::Value {
        serde_json::json!({ "error": format!("Failed to convert: {}", self) })
    }
}
