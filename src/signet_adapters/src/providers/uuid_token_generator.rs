use signet_core::TokenGenerator;
use uuid::Uuid;

/// Hands out random v4 UUIDs in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn random(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
