use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// `exp` and `iat` are Unix timestamps in seconds. `sub` is optional on the
/// wire so that a token lacking it decodes and can be rejected explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time
    pub exp: i64,

    /// Issued at
    pub iat: i64,
}

impl Claims {
    /// Create claims for `subject` issued at `now` and valid for `ttl`.
    pub fn for_subject(subject: impl ToString, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: Some(subject.to_string()),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check if token is expired. A token is still valid at its exact expiry second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_subject() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_subject(42, now, Duration::minutes(30));

        assert_eq!(claims.sub, Some("42".to_string()));
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: None,
            exp: 1000,
            iat: 0,
        };

        assert!(!claims.is_expired(999)); // Not expired
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }
}
