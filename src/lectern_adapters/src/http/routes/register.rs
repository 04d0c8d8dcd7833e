use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use lectern_application::RegisterUseCase;
use lectern_core::{Email, NewUser, Password, UserRole};
use secrecy::Secret;
use serde::Deserialize;

use crate::http::AccountState;
use crate::http::routes::error::{AccountApiError, MessageResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Secret<String>,
    pub user_type: String,
    #[serde(default)]
    pub group: Option<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip(state, request))]
pub async fn register(
    State(state): State<AccountState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    // Parse domain entities
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;
    let role: UserRole = request.user_type.parse()?;

    let new_user = NewUser::new(
        email,
        password,
        request.first_name,
        request.last_name,
        role,
        request.group,
    )?;

    let use_case = RegisterUseCase::new(state.user_store.as_ref());
    use_case.execute(new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}
