use signet_core::{User, UserId, UserRepository};

use crate::error::UserServiceError;

/// Verify email use case - activates a pending account with its certification code
pub struct VerifyEmailUseCase<'a, R>
where
    R: UserRepository,
{
    user_repository: &'a R,
}

impl<'a, R> VerifyEmailUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    /// Execute the verify email use case
    ///
    /// Nothing is written when the code does not match.
    #[tracing::instrument(name = "VerifyEmailUseCase::execute", skip(self, certification_code))]
    pub async fn execute(
        &self,
        id: UserId,
        certification_code: &str,
    ) -> Result<User, UserServiceError> {
        let user = self.user_repository.get_by_id(id).await?;
        let user = user.certify(certification_code)?;

        Ok(self.user_repository.save(user).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockUserRepository, PENDING_CODE};
    use signet_core::UserStatus;

    #[tokio::test]
    async fn test_verify_email_activates_pending_user() {
        let repository = MockUserRepository::seeded().await;
        let use_case = VerifyEmailUseCase::new(&repository);

        let user = use_case.execute(UserId::new(2), PENDING_CODE).await.unwrap();

        assert_eq!(user.status(), UserStatus::Active);
        assert_eq!(
            repository.stored(2).await.unwrap().status(),
            UserStatus::Active
        );
    }

    #[tokio::test]
    async fn test_verify_email_with_wrong_code_leaves_user_pending() {
        let repository = MockUserRepository::seeded().await;
        let use_case = VerifyEmailUseCase::new(&repository);

        let result = use_case
            .execute(UserId::new(2), "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaac")
            .await;

        assert!(matches!(result, Err(UserServiceError::CertificationCodeMismatch)));
        assert_eq!(
            repository.stored(2).await.unwrap().status(),
            UserStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_verify_email_for_unknown_user_is_not_found() {
        let repository = MockUserRepository::seeded().await;
        let use_case = VerifyEmailUseCase::new(&repository);

        let result = use_case.execute(UserId::new(5), PENDING_CODE).await;

        assert!(matches!(result, Err(UserServiceError::ResourceNotFound { .. })));
    }
}
