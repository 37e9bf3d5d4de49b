use signet_core::{Email, EmailClient};

/// Delivers messages to the log. Used when no mail transport is configured.
#[derive(Debug, Clone)]
pub struct TracingEmailClient {
    sender: Email,
}

impl TracingEmailClient {
    pub fn new(sender: Email) -> Self {
        Self { sender }
    }
}

#[async_trait::async_trait]
impl EmailClient for TracingEmailClient {
    #[tracing::instrument(name = "Sending email", skip_all)]
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        tracing::info!(
            from = self.sender.as_str(),
            to = recipient.as_str(),
            subject,
            content,
            "Email sent"
        );
        Ok(())
    }
}
