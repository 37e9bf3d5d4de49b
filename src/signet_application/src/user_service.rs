use signet_core::{
    Clock, Email, EmailClient, TokenGenerator, User, UserCreate, UserId, UserRepository,
    UserUpdate,
};

use crate::{
    certification::CertificationService,
    error::UserServiceError,
    responses::{MyProfileResponse, UserResponse},
    use_cases::{
        create_user::CreateUserUseCase, get_user::GetActiveUserUseCase, login::LoginUseCase,
        update_user::UpdateUserUseCase, verify_email::VerifyEmailUseCase,
    },
};

/// Entry point for every account operation.
///
/// Owns the ports and runs one use case per call. Load-then-save sequences
/// are not guarded against concurrent writers to the same account.
pub struct UserService<R, E>
where
    R: UserRepository,
    E: EmailClient,
{
    user_repository: R,
    certification_service: CertificationService<E>,
    clock: Box<dyn Clock>,
    tokens: Box<dyn TokenGenerator>,
}

impl<R, E> UserService<R, E>
where
    R: UserRepository,
    E: EmailClient,
{
    pub fn new(
        user_repository: R,
        certification_service: CertificationService<E>,
        clock: impl Clock + 'static,
        tokens: impl TokenGenerator + 'static,
    ) -> Self {
        Self {
            user_repository,
            certification_service,
            clock: Box::new(clock),
            tokens: Box::new(tokens),
        }
    }

    pub async fn create(&self, request: UserCreate) -> Result<User, UserServiceError> {
        CreateUserUseCase::new(
            &self.user_repository,
            &self.certification_service,
            self.tokens.as_ref(),
        )
        .execute(request)
        .await
    }

    pub async fn update(&self, id: UserId, request: UserUpdate) -> Result<User, UserServiceError> {
        UpdateUserUseCase::new(&self.user_repository)
            .execute(id, request)
            .await
    }

    pub async fn login(&self, id: UserId) -> Result<User, UserServiceError> {
        LoginUseCase::new(&self.user_repository, self.clock.as_ref())
            .execute(id)
            .await
    }

    pub async fn verify_email(
        &self,
        id: UserId,
        certification_code: &str,
    ) -> Result<User, UserServiceError> {
        VerifyEmailUseCase::new(&self.user_repository)
            .execute(id, certification_code)
            .await
    }

    pub async fn get_by_id(&self, id: UserId) -> Result<User, UserServiceError> {
        GetActiveUserUseCase::new(&self.user_repository)
            .by_id(id)
            .await
    }

    pub async fn get_by_email(&self, email: &Email) -> Result<User, UserServiceError> {
        GetActiveUserUseCase::new(&self.user_repository)
            .by_email(email)
            .await
    }

    pub async fn get_my_profile(&self, id: UserId) -> Result<MyProfileResponse, UserServiceError> {
        self.get_by_id(id).await.map(|user| MyProfileResponse::from(&user))
    }

    pub async fn get_user(&self, id: UserId) -> Result<UserResponse, UserServiceError> {
        self.get_by_id(id).await.map(|user| UserResponse::from(&user))
    }

    pub fn user_repository(&self) -> &R {
        &self.user_repository
    }

    pub fn certification_service(&self) -> &CertificationService<E> {
        &self.certification_service
    }
}
