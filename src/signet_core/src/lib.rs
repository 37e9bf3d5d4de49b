pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    certification_code::CertificationCode,
    email::Email,
    user::{User, UserCreate, UserError, UserRecord, UserUpdate},
    user_id::UserId,
    user_status::UserStatus,
};

pub use ports::{
    providers::{Clock, TokenGenerator},
    repositories::{UserRepository, UserRepositoryError},
    services::EmailClient,
};
