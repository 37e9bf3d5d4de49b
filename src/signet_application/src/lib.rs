pub mod certification;
pub mod error;
pub mod responses;
pub mod use_cases;
pub mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use certification::{CertificationError, CertificationService};
pub use error::UserServiceError;
pub use responses::{MyProfileResponse, UserResponse};
pub use use_cases::{
    create_user::CreateUserUseCase, get_user::GetActiveUserUseCase, login::LoginUseCase,
    update_user::UpdateUserUseCase, verify_email::VerifyEmailUseCase,
};
pub use user_service::UserService;
