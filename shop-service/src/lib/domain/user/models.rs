use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::access::models::Owned;
use crate::user::errors::EmailError;
use crate::user::errors::FullNameError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered user. Only the password hash is ever held.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub fullname: FullName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Owned for User {
    const KIND: &'static str = "User";

    fn owner_id(&self) -> UserId {
        self.id
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(UserId(id)),
            _ => Err(UserIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Full name value type
///
/// Trimmed, non-empty and at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    const MAX_LENGTH: usize = 100;

    pub fn new(fullname: String) -> Result<Self, FullNameError> {
        let fullname = fullname.trim().to_string();
        let length = fullname.chars().count();
        if length == 0 {
            Err(FullNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(FullNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(fullname))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password on its way to the hasher.
///
/// Not `Display`. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub fullname: FullName,
    pub email: EmailAddress,
    pub password: Password,
}

impl CreateUserCommand {
    /// Construct a new create user command.
    ///
    /// # Arguments
    /// * `fullname` - Validated full name
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(fullname: FullName, email: EmailAddress, password: Password) -> Self {
        Self {
            fullname,
            email,
            password,
        }
    }
}

/// Command to replace a user's fields. Every field is required, and the
/// password is re-hashed.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub fullname: FullName,
    pub email: EmailAddress,
    pub password: Password,
}

/// Fields of a user about to be inserted; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub fullname: FullName,
    pub email: EmailAddress,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parsing() {
        assert_eq!(UserId::from_string("1"), Ok(UserId(1)));
        assert_eq!(UserId::from_string(" 42 "), Ok(UserId(42)));
        assert!(UserId::from_string("0").is_err());
        assert!(UserId::from_string("-3").is_err());
        assert!(UserId::from_string("abc").is_err());
    }

    #[test]
    fn test_fullname_validation() {
        assert_eq!(
            FullName::new("  Ada Lovelace ".to_string()).unwrap().as_str(),
            "Ada Lovelace"
        );
        assert_eq!(FullName::new("   ".to_string()), Err(FullNameError::Empty));
        assert!(matches!(
            FullName::new("x".repeat(101)),
            Err(FullNameError::TooLong { max: 100, actual: 101 })
        ));
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("a@x.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("hunter2".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("hunter2"));
        assert_eq!(Password::new(String::new()), Err(PasswordPolicyError::Empty));
    }
}
