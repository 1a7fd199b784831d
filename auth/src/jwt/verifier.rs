use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::settings::TokenSettings;

/// Validates access tokens and extracts their subject.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(settings: &TokenSettings) -> Self {
        let mut validation = Validation::new(settings.algorithm());
        // Expiry is checked against the caller-supplied clock, without leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(settings.secret()),
            validation,
        }
    }

    /// Verify `token` at instant `now` and return its subject.
    ///
    /// # Errors
    /// * `DecodingFailed` - Bad signature, wrong algorithm, malformed token or missing `exp`
    /// * `MissingClaim` - Token carries no subject
    /// * `TokenExpired` - `now` is past the token's expiry
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| JwtError::DecodingFailed(e.to_string()))?
            .claims;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))
    }
}
