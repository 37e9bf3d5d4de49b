/// Source of the current time, in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn millis(&self) -> i64;
}

/// Source of fresh opaque tokens used as certification codes.
pub trait TokenGenerator: Send + Sync {
    fn random(&self) -> String;
}
