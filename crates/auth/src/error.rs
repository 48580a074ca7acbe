//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while resolving the current user.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authentication provider could not be reached.
    #[error("Auth provider unavailable: {0}")]
    Unavailable(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
