use std::fmt;

/// Custom error type for GitHub operations
///
/// Non-200 responses are not errors; they come back as
/// [`Fetched::Rejected`](crate::github::Fetched::Rejected).
#[derive(Debug)]
pub enum GhError {
    /// HTTP request failed at the transport level
    Http(reqwest::Error),
    /// Response body on a 200 could not be decoded
    Json(String),
    /// Configuration error (missing organization, bad API URL)
    Config(String),
    /// Writing the report failed
    Output(String),
}

impl fmt::Display for GhError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GhError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GhError::Json(msg) => write!(f, "JSON error: {}", msg),
            GhError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GhError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for GhError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GhError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GhError {
    fn from(err: reqwest::Error) -> Self {
        GhError::Http(err)
    }
}

impl From<serde_json::Error> for GhError {
    fn from(err: serde_json::Error) -> Self {
        GhError::Json(err.to_string())
    }
}

impl From<std::io::Error> for GhError {
    fn from(err: std::io::Error) -> Self {
        GhError::Output(err.to_string())
    }
}

/// Result type alias for GitHub operations
pub type Result<T> = std::result::Result<T, GhError>;
