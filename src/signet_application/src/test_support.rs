//! Hand-rolled port doubles shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use secrecy::ExposeSecret;
use signet_core::{
    CertificationCode, Clock, Email, EmailClient, TokenGenerator, User, UserId, UserRecord,
    UserRepository, UserRepositoryError, UserStatus,
};
use tokio::sync::RwLock;

pub const FIXED_NOW: i64 = 1678530673958;
pub const FIXED_TOKEN: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa";
pub const PENDING_CODE: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaab";

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

#[derive(Default, Clone)]
pub struct RecordingEmailClient {
    sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl RecordingEmailClient {
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait::async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        self.sent.write().await.push(SentEmail {
            recipient: recipient.as_ref().expose_secret().clone(),
            subject: subject.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}

#[derive(Clone)]
pub struct FailingEmailClient;

#[async_trait::async_trait]
impl EmailClient for FailingEmailClient {
    async fn send_email(
        &self,
        _recipient: &Email,
        _subject: &str,
        _content: &str,
    ) -> Result<(), String> {
        Err("smtp down".to_string())
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn millis(&self) -> i64 {
        FIXED_NOW
    }
}

pub struct FixedTokens;

impl TokenGenerator for FixedTokens {
    fn random(&self) -> String {
        FIXED_TOKEN.to_string()
    }
}

#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MockUserRepository {
    /// Active user 1 and pending user 2.
    pub async fn seeded() -> Self {
        let repository = Self::default();
        repository
            .save(user(1, "kok202@naver.com", "kok202", FIXED_TOKEN, UserStatus::Active))
            .await
            .unwrap();
        repository
            .save(user(2, "kok303@naver.com", "kok303", PENDING_CODE, UserStatus::Pending))
            .await
            .unwrap();
        repository
    }

    pub async fn stored(&self, id: i64) -> Option<User> {
        self.users.read().await.get(&UserId::new(id)).cloned()
    }
}

pub fn user(id: i64, email: &str, nickname: &str, code: &str, status: UserStatus) -> User {
    User::from(UserRecord {
        id: Some(UserId::new(id)),
        email: Email::try_from(email).unwrap(),
        nickname: nickname.to_string(),
        address: "Seoul".to_string(),
        certification_code: CertificationCode::new(code),
        status,
        last_login_at: Some(0),
    })
}

#[async_trait::async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_id_and_status(
        &self,
        id: UserId,
        status: UserStatus,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.find_by_id(id).await?.filter(|u| u.status() == status))
    }

    async fn find_by_email_and_status(
        &self,
        email: &Email,
        status: UserStatus,
    ) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email() == email && u.status() == status)
            .cloned())
    }

    async fn save(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;
        let user = match user.id() {
            Some(_) => user,
            None => user.with_id(UserId::new(users.len() as i64 + 1)),
        };
        let id = user.id().ok_or_else(|| {
            UserRepositoryError::UnexpectedError("user without id".to_string())
        })?;
        users.insert(id, user.clone());
        Ok(user)
    }
}
