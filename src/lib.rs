//! # Signet - User Account Lifecycle Library
//!
//! This is a facade crate that re-exports all public APIs from the signet components.
//! Use this crate to get registration, email certification, login stamping and
//! profile updates in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `User`, `Email`, `UserStatus`, `CertificationCode`, etc.
//! - **Ports**: `UserRepository`, `EmailClient`, `Clock`, `TokenGenerator`
//! - **Use cases**: `CreateUserUseCase`, `VerifyEmailUseCase`, etc.
//! - **Services**: `UserService` and `CertificationService`
//! - **Adapters**: `HashMapUserRepository`, `MockEmailClient`, `SystemClock`, etc.

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use signet_core::*;
}

// Re-export most commonly used core types at the root level
pub use signet_core::{
    CertificationCode, Email, User, UserCreate, UserError, UserId, UserRecord, UserStatus,
    UserUpdate,
};

// ============================================================================
// Ports
// ============================================================================

pub use signet_core::{Clock, EmailClient, TokenGenerator, UserRepository, UserRepositoryError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use signet_application::use_cases::*;
}

pub use signet_application::{
    CertificationError, CertificationService, CreateUserUseCase, GetActiveUserUseCase,
    LoginUseCase, MyProfileResponse, UpdateUserUseCase, UserResponse, UserService,
    UserServiceError, VerifyEmailUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use signet_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use signet_adapters::email::*;
    }

    /// Clock and token providers
    pub mod providers {
        pub use signet_adapters::providers::*;
    }

    /// Configuration
    pub mod config {
        pub use signet_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use signet_adapters::{
    config::SignetSettings,
    email::{MockEmailClient, TracingEmailClient},
    persistence::HashMapUserRepository,
    providers::{FixedClock, FixedTokenGenerator, SystemClock, UuidTokenGenerator},
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
