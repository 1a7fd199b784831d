use thiserror::Error;

/// Error type for JWT operations.
///
/// The variants exist for diagnostics. Callers facing the outside world are
/// expected to collapse all verification failures into a single
/// "invalid credentials" answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid token settings: {0}")]
    InvalidSettings(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}
