use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::IssuedToken;
use chrono::DateTime;
use chrono::Utc;

use super::errors::AuthError;
use super::models::LoginCredentials;
use super::models::Principal;
use super::ports::AuthServicePort;
use super::resolver::IdentityResolver;
use crate::domain::user::models::UserId;
use crate::user::ports::UserRepository;

/// Login and request authentication on top of the `auth` primitives.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    resolver: IdentityResolver<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            resolver: IdentityResolver::new(Arc::clone(&repository)),
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(
        &self,
        credentials: LoginCredentials,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let Some(user) = self.repository.find_by_email(&credentials.email).await? else {
            // Unknown emails go through the same hashing work as wrong passwords.
            self.authenticator.verify_password(&credentials.password, "");
            tracing::debug!("Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        let token = self
            .authenticator
            .authenticate(&credentials.password, &user.password_hash, user.id, now)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => AuthError::TokenIssuance(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }

    async fn authenticate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Principal, AuthError> {
        let subject = self.authenticator.validate_token(token, now).map_err(|e| {
            tracing::warn!(error = %e, "JWT validation failed");
            AuthError::InvalidCredentials
        })?;

        let user_id = UserId::from_string(&subject).map_err(|e| {
            tracing::warn!(error = %e, "Token subject is not a user id");
            AuthError::InvalidCredentials
        })?;

        self.resolver.resolve(&user_id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "Token subject no longer exists");
            AuthError::InvalidCredentials
        })
    }
}
