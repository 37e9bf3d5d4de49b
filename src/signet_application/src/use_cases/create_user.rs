use signet_core::{
    EmailClient, TokenGenerator, User, UserCreate, UserRepository, UserRepositoryError,
};

use crate::{certification::CertificationService, error::UserServiceError};

/// Create user use case - registers a pending account and mails its certification link
pub struct CreateUserUseCase<'a, R, E>
where
    R: UserRepository,
    E: EmailClient,
{
    user_repository: &'a R,
    certification_service: &'a CertificationService<E>,
    tokens: &'a dyn TokenGenerator,
}

impl<'a, R, E> CreateUserUseCase<'a, R, E>
where
    R: UserRepository,
    E: EmailClient,
{
    pub fn new(
        user_repository: &'a R,
        certification_service: &'a CertificationService<E>,
        tokens: &'a dyn TokenGenerator,
    ) -> Self {
        Self {
            user_repository,
            certification_service,
            tokens,
        }
    }

    /// Execute the create user use case
    ///
    /// # Returns
    /// The persisted user, still pending, or the first error from storage or mail
    #[tracing::instrument(name = "CreateUserUseCase::execute", skip(self))]
    pub async fn execute(&self, request: UserCreate) -> Result<User, UserServiceError> {
        let user = User::from_create(request, self.tokens);
        let user = self.user_repository.save(user).await?;

        let id = user.id().ok_or_else(|| {
            UserRepositoryError::UnexpectedError("saved user has no identifier".to_string())
        })?;

        self.certification_service
            .send(user.email(), id, user.certification_code())
            .await?;

        Ok(user)
    }
}
