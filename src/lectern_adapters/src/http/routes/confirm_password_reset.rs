use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::ConfirmPasswordResetUseCase;
use lectern_core::{Password, ResetToken};
use secrecy::Secret;
use serde::Deserialize;

use crate::http::AccountState;
use crate::http::routes::error::{AccountApiError, MessageResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPasswordResetRequest {
    pub token: Secret<String>,
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Confirm password reset", skip(state, request))]
pub async fn confirm_password_reset(
    State(state): State<AccountState>,
    Json(request): Json<ConfirmPasswordResetRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let token = ResetToken::parse(request.token)?;
    let new_password = Password::try_from(request.new_password)?;

    let use_case = ConfirmPasswordResetUseCase::new(
        state.user_store.as_ref(),
        state.reset_token_store.as_ref(),
        state.clock.as_ref(),
    );
    use_case.execute(token, new_password).await?;

    Ok(Json(MessageResponse::new("Password updated")))
}
