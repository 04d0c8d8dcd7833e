use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::ChangePasswordUseCase;
use lectern_core::Password;
use secrecy::Secret;
use serde::Deserialize;

use crate::http::{AccountState, SessionUser};
use crate::http::routes::error::{AccountApiError, MessageResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Secret<String>,
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Change password", skip(state, request))]
pub async fn change_password(
    SessionUser(claims): SessionUser,
    State(state): State<AccountState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let current_password = Password::try_from(request.current_password)
        .map_err(|_| AccountApiError::InvalidCredentials)?;
    let new_password = Password::try_from(request.new_password)?;

    let use_case = ChangePasswordUseCase::new(state.user_store.as_ref());
    use_case
        .execute(claims.sub, current_password, new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password updated")))
}
