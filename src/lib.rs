//! # Lectern - Account & Credential Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account
//! service components. Use this crate to get access to the whole account and
//! credential functionality in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `UserRole`, etc.
//! - **Repository traits**: `UserStore`, `ResetTokenStore`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `PostmarkEmailClient`, JWT sessions, etc.
//! - **Service**: `AccountService` - the main entry point

/// Core domain types and value objects
pub mod core {
    pub use lectern_core::*;
}

// Re-export most commonly used core types at the root level
pub use lectern_core::{
    Email, NewUser, Password, PasswordResetToken, ResetToken, User, UserError, UserRole,
};

/// Repository trait definitions
pub mod repositories {
    pub use lectern_core::{ResetTokenStore, ResetTokenStoreError, UserStore, UserStoreError};
}

pub use lectern_core::{
    Clock, EmailClient, ResetTokenStore, ResetTokenStoreError, SystemClock, UserStore,
    UserStoreError,
};

/// Application use cases
pub mod use_cases {
    pub use lectern_application::*;
}

pub use lectern_application::{
    ChangePasswordUseCase, ConfirmPasswordResetUseCase, LoginUseCase, RegisterUseCase,
    RequestPasswordResetUseCase,
};

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and API state
    pub mod http {
        pub use lectern_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use lectern_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use lectern_adapters::email::*;
    }

    /// JWT session utilities
    pub mod sessions {
        pub use lectern_adapters::sessions::*;
    }

    /// Configuration
    pub mod config {
        pub use lectern_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use lectern_adapters::{
    email::{MockEmailClient, PostmarkEmailClient},
    persistence::{
        HashMapResetTokenStore, HashMapUserStore, PostgresResetTokenStore, PostgresUserStore,
    },
};

/// Main account service
pub use lectern_service::AccountService;

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
