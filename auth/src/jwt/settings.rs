use std::fmt;

use chrono::Duration;
use jsonwebtoken::Algorithm;

use super::errors::JwtError;

/// Immutable token configuration shared by the issuer and the verifier.
///
/// Built once at startup and passed in explicitly; only HMAC algorithms are
/// accepted since tokens are signed with a shared secret.
#[derive(Clone)]
pub struct TokenSettings {
    secret: Vec<u8>,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenSettings {
    /// Validate and build token settings.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret
    /// * `algorithm` - Algorithm name (`HS256`, `HS384` or `HS512`, case-insensitive)
    /// * `ttl_minutes` - Token lifetime in minutes
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Unknown or non-HMAC algorithm
    /// * `InvalidSettings` - Empty secret or non-positive lifetime
    pub fn new(
        secret: impl Into<Vec<u8>>,
        algorithm: &str,
        ttl_minutes: i64,
    ) -> Result<Self, JwtError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(JwtError::InvalidSettings("secret must not be empty".to_string()));
        }

        let algorithm = match algorithm.trim().to_ascii_uppercase().parse::<Algorithm>() {
            Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => alg,
            _ => return Err(JwtError::UnsupportedAlgorithm(algorithm.to_string())),
        };

        let ttl = Duration::try_minutes(ttl_minutes)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| {
                JwtError::InvalidSettings(format!(
                    "token lifetime must be a positive number of minutes, got {}",
                    ttl_minutes
                ))
            })?;

        Ok(Self {
            secret,
            algorithm,
            ttl,
        })
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings() {
        let settings = TokenSettings::new("secret_key_at_least_32_bytes_long!", "hs512", 30)
            .expect("Failed to build settings");

        assert_eq!(settings.algorithm(), Algorithm::HS512);
        assert_eq!(settings.ttl(), Duration::minutes(30));
    }

    #[test]
    fn test_rejects_asymmetric_algorithm() {
        let result = TokenSettings::new("secret", "RS256", 30);
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let result = TokenSettings::new("secret", "sha256", 30);
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_rejects_empty_secret_and_bad_ttl() {
        assert!(matches!(
            TokenSettings::new("", "HS256", 30),
            Err(JwtError::InvalidSettings(_))
        ));
        assert!(matches!(
            TokenSettings::new("secret", "HS256", 0),
            Err(JwtError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = TokenSettings::new("super-secret-value", "HS256", 30).unwrap();
        assert!(!format!("{:?}", settings).contains("super-secret-value"));
    }
}
