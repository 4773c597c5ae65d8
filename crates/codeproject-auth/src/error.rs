//! Error types for credential and token operations

/// Errors from credential and token operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("token response parse error: {0}")]
    TokenParse(String),
}

/// Result alias for credential and token operations.
pub type Result<T> = std::result::Result<T, Error>;
