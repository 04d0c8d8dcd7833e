use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email,
    password::Password,
    reset_token::{PasswordResetToken, ResetToken},
    user::{NewUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new account, transforming the password material into a
    /// one-way credential. The unique email constraint is the authority on
    /// duplicates, also under concurrent registration.
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn get_user_by_id(&self, id: Uuid) -> Result<User, UserStoreError>;
    /// Verify the supplied password material against the stored credential.
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError>;
    /// Replace the stored credential with a freshly derived one.
    async fn set_new_password(
        &self,
        user_id: Uuid,
        new_password: Password,
    ) -> Result<(), UserStoreError>;
}

// ResetTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum ResetTokenStoreError {
    #[error("Reset token not found")]
    TokenNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for ResetTokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::TokenNotFound, Self::TokenNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait ResetTokenStore: Send + Sync {
    async fn store_token(&self, token: PasswordResetToken) -> Result<(), ResetTokenStoreError>;
    async fn get_token(&self, token: &ResetToken)
    -> Result<PasswordResetToken, ResetTokenStoreError>;
    /// Remove the token row in a single atomic step. A miss means the token
    /// was never issued or has already been consumed; callers treat both the
    /// same, which keeps concurrent confirmations single-winner.
    async fn consume_token(&self, token: &ResetToken) -> Result<(), ResetTokenStoreError>;
}
