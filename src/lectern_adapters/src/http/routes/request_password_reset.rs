use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::RequestPasswordResetUseCase;
use lectern_core::Email;
use secrecy::Secret;
use serde::Deserialize;

use crate::http::AccountState;
use crate::http::routes::error::{AccountApiError, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub email: Secret<String>,
}

#[tracing::instrument(name = "Request password reset", skip(state, request))]
pub async fn request_password_reset(
    State(state): State<AccountState>,
    Json(request): Json<PasswordResetRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let email = Email::try_from(request.email)?;

    let use_case = RequestPasswordResetUseCase::new(
        state.user_store.as_ref(),
        state.reset_token_store.as_ref(),
        state.email_client.as_ref(),
        state.clock.as_ref(),
    );
    use_case.execute(email, &state.reset_url_base).await?;

    Ok(Json(MessageResponse::new("Password reset email sent")))
}
