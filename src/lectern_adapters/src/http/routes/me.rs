use axum::{Json, extract::State};
use lectern_core::{User, UserRole};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http::{AccountState, SessionUser};
use crate::http::routes::error::AccountApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl From<&User> for MeResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().as_ref().expose_secret().clone(),
            name: user.full_name(),
            role: user.role(),
            group: user.study_group().map(str::to_string),
        }
    }
}

#[tracing::instrument(name = "Me", skip_all)]
pub async fn me(
    SessionUser(claims): SessionUser,
    State(state): State<AccountState>,
) -> Result<Json<MeResponse>, AccountApiError> {
    let user = state.user_store.get_user_by_id(claims.sub).await?;

    Ok(Json(MeResponse::from(&user)))
}
