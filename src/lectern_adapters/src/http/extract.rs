use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::http::AccountState;
use crate::http::routes::error::AccountApiError;
use crate::sessions::{SessionClaims, extract_bearer_token, validate_session_token};

/// Extractor for routes that require an authenticated session.
///
/// Reads the bearer token from the `Authorization` header and verifies
/// signature, expiry and claim presence. No session store is consulted.
pub struct SessionUser(pub SessionClaims);

impl FromRequestParts<AccountState> for SessionUser {
    type Rejection = AccountApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AccountState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;
        let claims = validate_session_token(token, &state.sessions)?;

        Ok(SessionUser(claims))
    }
}
