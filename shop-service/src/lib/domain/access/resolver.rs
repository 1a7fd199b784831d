use std::sync::Arc;

use super::models::Principal;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Maps a verified token subject to the user it names.
///
/// One store lookup per call; there is no cache.
pub struct IdentityResolver<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> IdentityResolver<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }

    /// Resolve `subject` to a principal, or `None` if the user is gone.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    pub async fn resolve(&self, subject: &UserId) -> Result<Option<Principal>, UserError> {
        Ok(self
            .repository
            .find_by_id(subject)
            .await?
            .as_ref()
            .map(Principal::from))
    }
}
