use signet_core::{User, UserId, UserRepository, UserUpdate};

use crate::error::UserServiceError;

/// Update user use case - replaces nickname and address of any stored account
pub struct UpdateUserUseCase<'a, R>
where
    R: UserRepository,
{
    user_repository: &'a R,
}

impl<'a, R> UpdateUserUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "UpdateUserUseCase::execute", skip(self))]
    pub async fn execute(&self, id: UserId, update: UserUpdate) -> Result<User, UserServiceError> {
        let user = self.user_repository.get_by_id(id).await?;
        let user = user.update(update);

        Ok(self.user_repository.save(user).await?)
    }
}
