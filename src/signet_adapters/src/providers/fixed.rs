//! Deterministic providers for tests and reproducible runs.

use signet_core::{Clock, TokenGenerator};

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Clock for FixedClock {
    fn millis(&self) -> i64 {
        self.millis
    }
}

#[derive(Debug, Clone)]
pub struct FixedTokenGenerator {
    token: String,
}

impl FixedTokenGenerator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenGenerator for FixedTokenGenerator {
    fn random(&self) -> String {
        self.token.clone()
    }
}
