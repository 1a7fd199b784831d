use chrono::DateTime;
use chrono::Utc;

use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenSettings;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token handling.
///
/// Holds no mutable state; one instance is shared by every request.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator from validated token settings.
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            issuer: TokenIssuer::new(settings),
            verifier: TokenVerifier::new(settings),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to encode in the token
    /// * `now` - Issue instant
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issuer.issue(subject, now)?)
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(
        &self,
        subject: impl ToString,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        self.issuer.issue(subject, now)
    }

    /// Validate a token at instant `now` and return its subject.
    ///
    /// # Errors
    /// * `JwtError` - Token is malformed, forged, expired or has no subject
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.verifier.verify(token, now)
    }
}
