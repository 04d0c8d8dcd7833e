use chrono::Utc;
use http::{HeaderMap, header::AUTHORIZATION};
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use lectern_core::User;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Fixed lifetime of a session token.
pub const SESSION_TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Clone)]
pub struct SessionConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_seconds: i64,
}

impl SessionConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            jwt_secret,
            token_ttl_seconds: SESSION_TOKEN_TTL_SECONDS,
        }
    }

    fn secret_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("Missing token")]
    MissingToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Claims carried by a session token: the user id, the email it was issued
/// for and the expiry instant. Nothing else is persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub email: String,
    pub exp: usize,
}

/// Mint a session token for an authenticated user.
pub fn generate_session_token(
    user: &User,
    config: &SessionConfig,
) -> Result<String, SessionTokenError> {
    let delta = chrono::Duration::try_seconds(config.token_ttl_seconds).ok_or(
        SessionTokenError::UnexpectedError("Failed to create session token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(SessionTokenError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp.try_into().map_err(|_| {
        SessionTokenError::UnexpectedError("Failed to cast i64 to usize".to_string())
    })?;

    let claims = SessionClaims {
        sub: user.id(),
        email: user.email().as_ref().expose_secret().clone(),
        exp,
    };

    create_token(&claims, config.secret_bytes())
}

/// Check a session token by decoding it using the JWT secret.
///
/// Purely signature + expiry + claim presence - stateless and parallel-safe.
/// Leeway is zero so a token is rejected from the first second past expiry.
pub fn validate_session_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, SessionTokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(SessionTokenError::TokenError)
}

/// Pull the bearer token out of the `Authorization` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, SessionTokenError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(SessionTokenError::MissingToken)?;
    let value = header
        .to_str()
        .map_err(|_| SessionTokenError::MissingToken)?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(SessionTokenError::MissingToken),
    }
}

fn create_token(claims: &SessionClaims, secret: &[u8]) -> Result<String, SessionTokenError> {
    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(SessionTokenError::TokenError)
}
