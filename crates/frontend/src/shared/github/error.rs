use thiserror::Error;

/// Failure of a single API read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{path} returned HTTP {status}")]
    Status { status: u16, path: String },

    #[error("failed to parse response: {0}")]
    Decode(String),
}
