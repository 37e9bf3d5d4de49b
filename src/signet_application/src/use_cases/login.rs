use signet_core::{Clock, User, UserId, UserRepository};

use crate::error::UserServiceError;

/// Login use case - stamps the last login time of an account
pub struct LoginUseCase<'a, R>
where
    R: UserRepository,
{
    user_repository: &'a R,
    clock: &'a dyn Clock,
}

impl<'a, R> LoginUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(user_repository: &'a R, clock: &'a dyn Clock) -> Self {
        Self {
            user_repository,
            clock,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self))]
    pub async fn execute(&self, id: UserId) -> Result<User, UserServiceError> {
        let user = self.user_repository.get_by_id(id).await?;
        let user = user.login(self.clock);

        Ok(self.user_repository.save(user).await?)
    }
}
