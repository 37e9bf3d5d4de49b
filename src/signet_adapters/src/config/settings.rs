use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

use super::constants::{CONFIG_FILE, defaults, env};

#[derive(Debug, Clone, Deserialize)]
pub struct SignetSettings {
    pub certification: CertificationSettings,
    pub email_client: EmailClientSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertificationSettings {
    /// Scheme and host the verification link points at.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub sender: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub filter: String,
}

impl SignetSettings {
    /// Loads settings from `.env`, an optional `signet.json` and
    /// `SIGNET__SECTION__KEY` environment variables, in increasing priority.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(
                    Environment::with_prefix(env::ENV_PREFIX)
                        .prefix_separator(env::ENV_SEPARATOR)
                        .separator(env::ENV_SEPARATOR),
                ),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("certification.base_url", defaults::CERTIFICATION_BASE_URL)?
            .set_default("email_client.sender", defaults::EMAIL_SENDER)?
            .set_default("log.filter", defaults::LOG_FILTER)?
            .build()?
            .try_deserialize()
    }
}
