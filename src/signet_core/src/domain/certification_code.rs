use std::fmt;

use secrecy::{ExposeSecret, Secret};

/// Opaque token mailed to a new user to prove control of the address.
///
/// The value is only ever compared for equality and rendered into the
/// verification link, so it is kept behind [`Secret`] to stay out of logs.
#[derive(Clone)]
pub struct CertificationCode(Secret<String>);

impl CertificationCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(Secret::new(code.into()))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0.expose_secret() == candidate
    }
}

impl AsRef<Secret<String>> for CertificationCode {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for CertificationCode {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for CertificationCode {}

impl fmt::Debug for CertificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CertificationCode([REDACTED])")
    }
}
