use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;
use super::settings::TokenSettings;

/// Token type label returned alongside every access token.
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// An access token ready to be handed to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
}

/// Mints signed, time-limited access tokens.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret()),
            algorithm: settings.algorithm(),
            ttl: settings.ttl(),
        }
    }

    /// Issue a token for `subject`, expiring `ttl` after `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: impl ToString, now: DateTime<Utc>) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_subject(subject, now, self.ttl);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map(|access_token| IssuedToken {
                access_token,
                token_type: TOKEN_TYPE_BEARER.to_string(),
            })
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
