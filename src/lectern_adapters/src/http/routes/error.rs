use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lectern_application::{
    ChangePasswordError, ConfirmPasswordResetError, LoginError, RegisterError,
    RequestPasswordResetError,
};
use lectern_core::{ResetTokenError, ResetTokenStoreError, UserError, UserStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sessions::SessionTokenError;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error taxonomy. Every layer error is mapped into one of these at the
/// route boundary; raw store/crypto detail is logged, never sent.
#[derive(Debug, Error)]
pub enum AccountApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("User already exists")]
    UserAlreadyExists,

    /// One message for unknown email and wrong password alike, so responses
    /// cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid or expired session")]
    InvalidSession,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    #[error("Failed to send reset email")]
    DeliveryError(String),

    #[error("Unexpected error")]
    UnexpectedError(String),
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AccountApiError::InvalidInput(_) | AccountApiError::InvalidResetToken => {
                StatusCode::BAD_REQUEST
            }

            AccountApiError::UserAlreadyExists => StatusCode::CONFLICT,

            AccountApiError::InvalidCredentials | AccountApiError::MissingToken => {
                StatusCode::UNAUTHORIZED
            }

            AccountApiError::InvalidSession => StatusCode::FORBIDDEN,

            AccountApiError::UserNotFound => StatusCode::NOT_FOUND,

            AccountApiError::DeliveryError(_) | AccountApiError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Operator detail stays in the logs; the client sees the uniform
        // message from the Display impl.
        match &self {
            AccountApiError::DeliveryError(detail) | AccountApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "request failed");
            }
            _ => {}
        }

        let body = Json(MessageResponse::new(self.to_string()));

        (status_code, body).into_response()
    }
}

impl From<UserError> for AccountApiError {
    fn from(error: UserError) -> Self {
        AccountApiError::InvalidInput(error.to_string())
    }
}

impl From<ResetTokenError> for AccountApiError {
    fn from(_: ResetTokenError) -> Self {
        AccountApiError::InvalidResetToken
    }
}

impl From<SessionTokenError> for AccountApiError {
    fn from(error: SessionTokenError) -> Self {
        match error {
            SessionTokenError::MissingToken => AccountApiError::MissingToken,
            SessionTokenError::TokenError(e) => {
                tracing::debug!(error = %e, "session token rejected");
                AccountApiError::InvalidSession
            }
            SessionTokenError::UnexpectedError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<UserStoreError> for AccountApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => AccountApiError::UserAlreadyExists,
            UserStoreError::UserNotFound => AccountApiError::UserNotFound,
            UserStoreError::IncorrectPassword => AccountApiError::InvalidCredentials,
            UserStoreError::UnexpectedError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<ResetTokenStoreError> for AccountApiError {
    fn from(error: ResetTokenStoreError) -> Self {
        match error {
            ResetTokenStoreError::TokenNotFound => AccountApiError::InvalidResetToken,
            ResetTokenStoreError::UnexpectedError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<RegisterError> for AccountApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<LoginError> for AccountApiError {
    fn from(error: LoginError) -> Self {
        match error {
            // Collapse "no such user" and "wrong password" into one response.
            LoginError::UserStoreError(
                UserStoreError::UserNotFound | UserStoreError::IncorrectPassword,
            ) => AccountApiError::InvalidCredentials,
            LoginError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<ChangePasswordError> for AccountApiError {
    fn from(error: ChangePasswordError) -> Self {
        match error {
            ChangePasswordError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<RequestPasswordResetError> for AccountApiError {
    fn from(error: RequestPasswordResetError) -> Self {
        match error {
            RequestPasswordResetError::UserStoreError(e) => e.into(),
            RequestPasswordResetError::ResetTokenStoreError(e) => e.into(),
            RequestPasswordResetError::DeliveryError(e) => AccountApiError::DeliveryError(e),
        }
    }
}

impl From<ConfirmPasswordResetError> for AccountApiError {
    fn from(error: ConfirmPasswordResetError) -> Self {
        match error {
            ConfirmPasswordResetError::InvalidToken => AccountApiError::InvalidResetToken,
            ConfirmPasswordResetError::UserStoreError(e) => e.into(),
            ConfirmPasswordResetError::ResetTokenStoreError(e) => e.into(),
        }
    }
}
