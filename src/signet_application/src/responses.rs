use serde::Serialize;
use signet_core::{User, UserId, UserStatus};

/// Public view of an account, as shown to other users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Option<UserId>,
    pub email: String,
    pub nickname: String,
    pub status: UserStatus,
    pub last_login_at: Option<i64>,
}

/// The account owner's own view, which also carries the postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyProfileResponse {
    pub id: Option<UserId>,
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub status: UserStatus,
    pub last_login_at: Option<i64>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().as_str().to_string(),
            nickname: user.nickname().to_string(),
            status: user.status(),
            last_login_at: user.last_login_at(),
        }
    }
}

impl From<&User> for MyProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().as_str().to_string(),
            nickname: user.nickname().to_string(),
            address: user.address().to_string(),
            status: user.status(),
            last_login_at: user.last_login_at(),
        }
    }
}
