pub const CONFIG_FILE: &str = "signet";

pub mod env {
    pub const ENV_PREFIX: &str = "SIGNET";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod defaults {
    pub const CERTIFICATION_BASE_URL: &str = "http://localhost:8080";
    pub const EMAIL_SENDER: &str = "no-reply@localhost";
    pub const LOG_FILTER: &str = "info";
}
