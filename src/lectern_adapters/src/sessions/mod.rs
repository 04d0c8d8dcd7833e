mod jwt_sessions;

pub use jwt_sessions::{
    SESSION_TOKEN_TTL_SECONDS, SessionClaims, SessionConfig, SessionTokenError,
    extract_bearer_token, generate_session_token, validate_session_token,
};
