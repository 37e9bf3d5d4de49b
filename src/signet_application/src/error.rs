use signet_core::{UserError, UserRepositoryError};

use crate::certification::CertificationError;

/// Errors surfaced by the user use cases.
#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("{resource} {id} not found")]
    ResourceNotFound { resource: &'static str, id: String },
    #[error("Certification code does not match")]
    CertificationCodeMismatch,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("User repository error: {0}")]
    UserRepositoryError(UserRepositoryError),
    #[error("Certification error: {0}")]
    CertificationError(#[from] CertificationError),
}

impl UserServiceError {
    pub(crate) fn user_not_found(id: impl ToString) -> Self {
        Self::ResourceNotFound {
            resource: USERS_RESOURCE,
            id: id.to_string(),
        }
    }
}

const USERS_RESOURCE: &str = "Users";

impl From<UserRepositoryError> for UserServiceError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UserNotFound(id) => Self::user_not_found(id),
            other => Self::UserRepositoryError(other),
        }
    }
}

impl From<UserError> for UserServiceError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::CertificationCodeMismatch => Self::CertificationCodeMismatch,
            UserError::InvalidEmail => Self::InvalidInput(error.to_string()),
        }
    }
}
