//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the shop service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (HMAC JWT) with explicit settings
//! - Authentication coordination
//!
//! Nothing here touches storage. Resolving a token subject to a user record and
//! deciding what that user may do are left to the service.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenIssuer, TokenSettings, TokenVerifier};
//! use chrono::Utc;
//!
//! let settings = TokenSettings::new("secret_key_at_least_32_bytes_long!", "HS256", 30).unwrap();
//! let now = Utc::now();
//! let token = TokenIssuer::new(&settings).issue(42, now).unwrap();
//! let subject = TokenVerifier::new(&settings).verify(&token.access_token, now).unwrap();
//! assert_eq!(subject, "42");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenSettings};
//! use chrono::Utc;
//!
//! let settings = TokenSettings::new("secret_key_at_least_32_bytes_long!", "HS256", 30).unwrap();
//! let auth = Authenticator::new(&settings);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let token = auth.authenticate("password123", &hash, 1, Utc::now()).unwrap();
//! assert_eq!(token.token_type, "bearer");
//!
//! // Later requests: validate token
//! let subject = auth.validate_token(&token.access_token, Utc::now()).unwrap();
//! assert_eq!(subject, "1");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::TokenSettings;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
