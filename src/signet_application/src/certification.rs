use secrecy::ExposeSecret;
use signet_core::{CertificationCode, Email, EmailClient, UserId};

pub const CERTIFICATION_SUBJECT: &str = "Please certify your email address";

#[derive(Debug, thiserror::Error)]
pub enum CertificationError {
    #[error("Failed to send email: {0}")]
    EmailError(String),
}

/// Composes and dispatches the certification email for a new account.
pub struct CertificationService<E>
where
    E: EmailClient,
{
    email_client: E,
    base_url: String,
}

impl<E> CertificationService<E>
where
    E: EmailClient,
{
    /// `base_url` is the scheme and host the verification link points at,
    /// e.g. `http://localhost:8080`.
    pub fn new(email_client: E, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            email_client,
            base_url,
        }
    }

    #[tracing::instrument(name = "CertificationService::send", skip(self, certification_code))]
    pub async fn send(
        &self,
        email: &Email,
        user_id: UserId,
        certification_code: &CertificationCode,
    ) -> Result<(), CertificationError> {
        let url = self.verification_url(user_id, certification_code);
        let content =
            format!("Please click the following link to certify your email address: {url}");

        self.email_client
            .send_email(email, CERTIFICATION_SUBJECT, &content)
            .await
            .map_err(CertificationError::EmailError)
    }

    pub fn verification_url(
        &self,
        user_id: UserId,
        certification_code: &CertificationCode,
    ) -> String {
        format!(
            "{}/api/users/{}/verify?certificationCode={}",
            self.base_url,
            user_id,
            certification_code.as_ref().expose_secret()
        )
    }

    pub fn email_client(&self) -> &E {
        &self.email_client
    }
}
