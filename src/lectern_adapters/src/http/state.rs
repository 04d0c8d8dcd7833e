use std::sync::Arc;

use lectern_core::{Clock, EmailClient, ResetTokenStore, UserStore};

use crate::sessions::SessionConfig;

/// Shared state handed to every route.
///
/// The ports are trait objects behind `Arc`, so production wiring and test
/// doubles plug in the same way.
#[derive(Clone)]
pub struct AccountState {
    pub user_store: Arc<dyn UserStore>,
    pub reset_token_store: Arc<dyn ResetTokenStore>,
    pub email_client: Arc<dyn EmailClient>,
    pub clock: Arc<dyn Clock>,
    pub sessions: SessionConfig,
    /// Front-end URL reset tokens are appended to.
    pub reset_url_base: String,
}
