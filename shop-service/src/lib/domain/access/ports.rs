use async_trait::async_trait;
use auth::IssuedToken;
use chrono::DateTime;
use chrono::Utc;

use super::errors::AuthError;
use super::models::LoginCredentials;
use super::models::Principal;

/// Port for login and per-request authentication.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check credentials and issue an access token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    /// * `now` - Issue instant
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `TokenIssuance` - Signing failed
    /// * `User(DatabaseError)` - Lookup failed
    async fn login(
        &self,
        credentials: LoginCredentials,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError>;

    /// Turn a presented bearer token into the calling principal.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Token invalid at `now`, or its subject does not exist
    /// * `User(DatabaseError)` - Lookup failed
    async fn authenticate(&self, token: &str, now: DateTime<Utc>)
        -> Result<Principal, AuthError>;
}
