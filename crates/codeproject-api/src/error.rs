//! Error types for API request execution

/// Errors from API request execution.
///
/// Non-2xx resource responses are deliberately NOT errors; those come back
/// as an absent result with the status readable on the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("response parse error: {0}")]
    Parse(String),
}

/// Result alias for API request execution.
pub type Result<T> = std::result::Result<T, Error>;
