use thiserror::Error;

use crate::ports::providers::{Clock, TokenGenerator};

use super::{
    certification_code::CertificationCode, email::Email, user_id::UserId,
    user_status::UserStatus,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Certification code does not match")]
    CertificationCodeMismatch,
    #[error("Invalid email address")]
    InvalidEmail,
}

/// Registration request for a new account.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: Email,
    pub nickname: String,
    pub address: String,
}

/// Profile change request. Both fields replace the stored values.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub nickname: String,
    pub address: String,
}

/// Field-by-field form of a [`User`], used to restore a stored account.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Option<UserId>,
    pub email: Email,
    pub nickname: String,
    pub address: String,
    pub certification_code: CertificationCode,
    pub status: UserStatus,
    pub last_login_at: Option<i64>,
}

/// A user account and its certification lifecycle.
///
/// Every transition returns a new value and leaves `self` untouched; the
/// caller decides whether to persist the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    email: Email,
    nickname: String,
    address: String,
    certification_code: CertificationCode,
    status: UserStatus,
    last_login_at: Option<i64>,
}

impl User {
    /// Builds a pending, not yet persisted user from a registration request.
    pub fn from_create(request: UserCreate, tokens: &dyn TokenGenerator) -> Self {
        Self {
            id: None,
            email: request.email,
            nickname: request.nickname,
            address: request.address,
            certification_code: CertificationCode::new(tokens.random()),
            status: UserStatus::Pending,
            last_login_at: None,
        }
    }

    pub fn update(&self, update: UserUpdate) -> Self {
        Self {
            nickname: update.nickname,
            address: update.address,
            ..self.clone()
        }
    }

    pub fn login(&self, clock: &dyn Clock) -> Self {
        Self {
            last_login_at: Some(clock.millis()),
            ..self.clone()
        }
    }

    /// Activates the account when `code` is exactly the stored certification code.
    pub fn certify(&self, code: &str) -> Result<Self, UserError> {
        if !self.certification_code.matches(code) {
            return Err(UserError::CertificationCodeMismatch);
        }

        Ok(Self {
            status: UserStatus::Active,
            ..self.clone()
        })
    }

    pub fn with_id(&self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn certification_code(&self) -> &CertificationCode {
        &self.certification_code
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn last_login_at(&self) -> Option<i64> {
        self.last_login_at
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            nickname: record.nickname,
            address: record.address,
            certification_code: record.certification_code,
            status: record.status,
            last_login_at: record.last_login_at,
        }
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            nickname: user.nickname,
            address: user.address,
            certification_code: user.certification_code,
            status: user.status,
            last_login_at: user.last_login_at,
        }
    }
}
