pub mod fixed;
pub mod system_clock;
pub mod uuid_token_generator;

pub use fixed::{FixedClock, FixedTokenGenerator};
pub use system_clock::SystemClock;
pub use uuid_token_generator::UuidTokenGenerator;
