use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use signet_core::{Email, User, UserId, UserRepository, UserRepositoryError, UserStatus};

#[derive(Default, Clone)]
pub struct HashMapUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    last_id: Arc<AtomicI64>,
}

impl HashMapUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            last_id: Arc::new(AtomicI64::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for HashMapUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_id_and_status(
        &self,
        id: UserId,
        status: UserStatus,
    ) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(&id).filter(|u| u.status() == status).cloned())
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

    #[tracing::instrument(name = "Saving user to HashMapUserRepository", skip_all)]
    async fn save(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;

        // Email is the external identity: one account per address.
        if users
            .values()
            .any(|u| u.email() == user.email() && u.id() != user.id())
        {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let user = match user.id() {
            Some(id) => {
                self.last_id.fetch_max(id.value(), Ordering::SeqCst);
                user
            }
            None => user.with_id(UserId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)),
        };
        let id = user
            .id()
            .ok_or_else(|| UserRepositoryError::UnexpectedError("missing user id".to_string()))?;

        tracing::debug!(user_id = %id, status = %user.status(), "Stored user");
        users.insert(id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::internet::en::{SafeEmail, Username};
    use signet_core::{CertificationCode, UserRecord};

    fn record(id: Option<i64>, email: &str, status: UserStatus) -> User {
        User::from(UserRecord {
            id: id.map(UserId::new),
            email: Email::try_from(email).unwrap(),
            nickname: Username().fake(),
            address: "Seoul".to_string(),
            certification_code: CertificationCode::new("T1"),
            status,
            last_login_at: None,
        })
    }

    fn random_email() -> String {
        SafeEmail().fake()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repository = HashMapUserRepository::new();

        let first = repository
            .save(record(None, "first@example.com", UserStatus::Pending))
            .await
            .unwrap();
        let second = repository
            .save(record(None, "second@example.com", UserStatus::Pending))
            .await
            .unwrap();

        assert_eq!(first.id(), Some(UserId::new(1)));
        assert_eq!(second.id(), Some(UserId::new(2)));
    }

    #[tokio::test]
    async fn test_generated_ids_skip_explicitly_saved_ones() {
        let repository = HashMapUserRepository::new();
        repository
            .save(record(Some(5), "seeded@example.com", UserStatus::Active))
            .await
            .unwrap();

        let created = repository
            .save(record(None, "new@example.com", UserStatus::Pending))
            .await
            .unwrap();

        assert_eq!(created.id(), Some(UserId::new(6)));
    }

    #[tokio::test]
    async fn test_save_with_id_replaces_existing_user() {
        let repository = HashMapUserRepository::new();
        let email = random_email();
        let user = repository
            .save(record(None, &email, UserStatus::Pending))
            .await
            .unwrap();

        let certified = user.certify("T1").unwrap();
        repository.save(certified).await.unwrap();

        let stored = repository.get_by_id(user.id().unwrap()).await.unwrap();
        assert_eq!(stored.status(), UserStatus::Active);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_email() {
        let repository = HashMapUserRepository::new();
        let email = random_email();
        repository
            .save(record(None, &email, UserStatus::Pending))
            .await
            .unwrap();

        let result = repository
            .save(record(None, &email, UserStatus::Pending))
            .await;

        assert_eq!(result, Err(UserRepositoryError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_status_filtered_lookups() {
        let repository = HashMapUserRepository::new();
        let active = repository
            .save(record(Some(1), "active@example.com", UserStatus::Active))
            .await
            .unwrap();
        repository
            .save(record(Some(2), "pending@example.com", UserStatus::Pending))
            .await
            .unwrap();

        let by_id = repository
            .find_by_id_and_status(UserId::new(1), UserStatus::Active)
            .await
            .unwrap();
        assert_eq!(by_id, Some(active));

        let hidden = repository
            .find_by_id_and_status(UserId::new(2), UserStatus::Active)
            .await
            .unwrap();
        assert_eq!(hidden, None);

        let pending_email = Email::try_from("pending@example.com").unwrap();
        let by_email = repository
            .find_by_email_and_status(&pending_email, UserStatus::Pending)
            .await
            .unwrap();
        assert!(by_email.is_some());
        let hidden = repository
            .find_by_email_and_status(&pending_email, UserStatus::Active)
            .await
            .unwrap();
        assert!(hidden.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_reports_missing_user() {
        let repository = HashMapUserRepository::new();

        let result = repository.get_by_id(UserId::new(9)).await;

        assert_eq!(result, Err(UserRepositoryError::UserNotFound(UserId::new(9))));
    }
}
