use axum::{Json, extract::State, response::IntoResponse};
use lectern_application::LoginUseCase;
use lectern_core::{Email, Password, User};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http::AccountState;
use crate::http::routes::error::AccountApiError;
use crate::sessions::generate_session_token;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Redacted profile returned to clients; the credential hash never leaves
/// the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().as_ref().expose_secret().clone(),
            name: user.full_name(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: ProfileResponse,
}

#[tracing::instrument(name = "Login", skip(state, request))]
pub async fn login(
    State(state): State<AccountState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    // Credentials that cannot even parse get the same answer as credentials
    // that do not match - nothing to enumerate.
    let email =
        Email::try_from(request.email).map_err(|_| AccountApiError::InvalidCredentials)?;
    let password =
        Password::try_from(request.password).map_err(|_| AccountApiError::InvalidCredentials)?;

    let use_case = LoginUseCase::new(state.user_store.as_ref());
    let user = use_case.execute(email, password).await?;

    let token = generate_session_token(&user, &state.sessions)?;

    Ok(Json(LoginResponse {
        token,
        user: ProfileResponse::from(&user),
    }))
}
