pub mod mock_email_client;
pub mod tracing_email_client;

pub use mock_email_client::{MockEmailClient, SentEmail};
pub use tracing_email_client::TracingEmailClient;
