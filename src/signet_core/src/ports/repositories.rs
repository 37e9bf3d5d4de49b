use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User, user_id::UserId, user_status::UserStatus};

// UserRepository port trait and errors
#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("User {0} not found")]
    UserNotFound(UserId),
    #[error("User already exists")]
    EmailAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserRepositoryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserNotFound(a), Self::UserNotFound(b)) => a == b,
            (Self::EmailAlreadyExists, Self::EmailAlreadyExists) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_id_and_status(
        &self,
        id: UserId,
        status: UserStatus,
    ) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_email_and_status(
        &self,
        email: &Email,
        status: UserStatus,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Persists `user`, assigning an identifier when it has none yet.
    async fn save(&self, user: User) -> Result<User, UserRepositoryError>;

    async fn get_by_id(&self, id: UserId) -> Result<User, UserRepositoryError> {
        self.find_by_id(id)
            .await?
            .ok_or(UserRepositoryError::UserNotFound(id))
    }
}
