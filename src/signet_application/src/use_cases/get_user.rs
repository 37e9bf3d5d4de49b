use signet_core::{Email, User, UserId, UserRepository, UserStatus};

use crate::error::UserServiceError;

/// Reads that only see certified accounts. Anything not ACTIVE is reported
/// as not found.
pub struct GetActiveUserUseCase<'a, R>
where
    R: UserRepository,
{
    user_repository: &'a R,
}

impl<'a, R> GetActiveUserUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "GetActiveUserUseCase::by_id", skip(self))]
    pub async fn by_id(&self, id: UserId) -> Result<User, UserServiceError> {
        self.user_repository
            .find_by_id_and_status(id, UserStatus::Active)
            .await?
            .ok_or_else(|| UserServiceError::user_not_found(id))
    }

    #[tracing::instrument(name = "GetActiveUserUseCase::by_email", skip_all)]
    pub async fn by_email(&self, email: &Email) -> Result<User, UserServiceError> {
        self.user_repository
            .find_by_email_and_status(email, UserStatus::Active)
            .await?
            .ok_or_else(|| UserServiceError::user_not_found(email.as_str()))
    }
}
