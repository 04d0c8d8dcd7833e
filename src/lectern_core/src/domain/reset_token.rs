use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use rand::{Rng, distr::Alphanumeric};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;
use uuid::Uuid;

pub const RESET_TOKEN_LENGTH: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResetTokenError {
    #[error("Malformed reset token")]
    Malformed,
}

/// An unguessable, single-use password-reset token value.
#[derive(Debug, Clone)]
pub struct ResetToken(Secret<String>);

impl ResetToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        let value: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(RESET_TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(Secret::from(value))
    }

    /// Parse a client-supplied token value.
    ///
    /// Only shape is checked here; whether the token exists and is still
    /// valid is the store's call.
    pub fn parse(value: Secret<String>) -> Result<Self, ResetTokenError> {
        let raw = value.expose_secret();
        if raw.len() != RESET_TOKEN_LENGTH || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ResetTokenError::Malformed);
        }
        Ok(Self(value))
    }

    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for ResetToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for ResetToken {}

impl Hash for ResetToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

/// A persisted password-reset grant.
///
/// Lifecycle: `issued -> consumed` (row removed) or `issued -> expired`
/// (row remains but fails validation). Never updated in place.
#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    pub token: ResetToken,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl PasswordResetToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
