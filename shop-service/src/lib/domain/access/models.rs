use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// The authenticated actor behind a request.
///
/// Rebuilt from the user store on every request; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: UserId,
    pub email: EmailAddress,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// A resource with exactly one owning user.
pub trait Owned {
    /// Human-readable resource name used in error messages.
    const KIND: &'static str;

    fn owner_id(&self) -> UserId;
}

/// Credentials submitted to the login endpoint.
#[derive(Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
