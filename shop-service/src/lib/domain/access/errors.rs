use thiserror::Error;

use crate::user::errors::UserError;

/// Outcome of a failed ownership check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessDenied {
    #[error("{kind} with id: {id} was not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Not authorized to perform requested action")]
    Forbidden,
}

/// Error for login and request authentication.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Bad login, or a token that is malformed, forged, expired or whose
    /// subject no longer exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error(transparent)]
    User(#[from] UserError),
}
