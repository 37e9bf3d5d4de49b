pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{CertificationSettings, EmailClientSettings, LogSettings, SignetSettings};
