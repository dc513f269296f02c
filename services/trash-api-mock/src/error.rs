//! Error types for the detection API mock

/// Errors that can occur while configuring or running the mock
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for mock operations
pub type Result<T> = std::result::Result<T, MockError>;
