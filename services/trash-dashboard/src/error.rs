//! Error types for the dashboard

use std::fmt;

/// Why a request to the detection API did not produce a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// No base URL was configured, so no request was sent
    NotConfigured,
    /// The request never produced an HTTP response
    Transport(String),
    /// The server answered with a non-2xx status
    Status(u16),
    /// The body was not the expected JSON
    Body(String),
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCause::NotConfigured => write!(f, "base URL is not configured"),
            FailureCause::Transport(msg) => write!(f, "transport error: {msg}"),
            FailureCause::Status(status) => write!(f, "HTTP {status}"),
            FailureCause::Body(msg) => write!(f, "malformed body: {msg}"),
        }
    }
}

/// Errors that can occur in the dashboard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Request to {endpoint} failed: {cause}")]
    RequestFailed {
        endpoint: String,
        cause: FailureCause,
    },
}

impl DashboardError {
    pub fn request_failed(endpoint: impl Into<String>, cause: FailureCause) -> Self {
        DashboardError::RequestFailed {
            endpoint: endpoint.into(),
            cause,
        }
    }

    pub fn cause(&self) -> &FailureCause {
        match self {
            DashboardError::RequestFailed { cause, .. } => cause,
        }
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
