use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::errors::AccessDenied;
use crate::domain::access::guard::authorize;
use crate::domain::access::models::Owned;
use crate::domain::access::models::Principal;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    async fn find_owned(&self, principal: &Principal, id: &UserId) -> Result<User, UserError> {
        let user = self.repository.find_by_id(id).await?;
        Ok(authorize(principal, id, user)?)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(command.password.expose())
            .map_err(|e| UserError::Password(e.to_string()))?;

        let user = self
            .repository
            .create(NewUser {
                fullname: command.fullname,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            UserError::Access(AccessDenied::NotFound {
                kind: User::KIND,
                id: id.to_string(),
            })
        })
    }

    async fn get_users(&self, ids: &[UserId]) -> Result<Vec<User>, UserError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.find_by_ids(ids).await
    }

    async fn update_user(
        &self,
        principal: &Principal,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self.find_owned(principal, id).await?;

        user.fullname = command.fullname;
        user.email = command.email;
        user.password_hash = self
            .password_hasher
            .hash(command.password.expose())
            .map_err(|e| UserError::Password(e.to_string()))?;

        let updated_user = self.repository.update(user).await?;

        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, principal: &Principal, id: &UserId) -> Result<(), UserError> {
        self.find_owned(principal, id).await?;
        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
