pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    password::Password,
    reset_token::{PasswordResetToken, ResetToken, ResetTokenError, RESET_TOKEN_LENGTH},
    user::{NewUser, User, UserError, UserRole},
};

pub use ports::{
    repositories::{ResetTokenStore, ResetTokenStoreError, UserStore, UserStoreError},
    services::{Clock, EmailClient, SystemClock},
};
