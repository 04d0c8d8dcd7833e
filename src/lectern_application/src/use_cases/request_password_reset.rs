use chrono::Duration;
use lectern_core::{
    Clock, Email, EmailClient, PasswordResetToken, ResetToken, ResetTokenStore,
    ResetTokenStoreError, UserStore, UserStoreError,
};
use secrecy::ExposeSecret;

/// Fixed lifetime of a password-reset token.
pub const RESET_TOKEN_TTL_SECONDS: i64 = 3600;

/// Error types for the request password reset use case
#[derive(Debug, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Reset token store error: {0}")]
    ResetTokenStoreError(#[from] ResetTokenStoreError),
    #[error("Failed to send reset email: {0}")]
    DeliveryError(String),
}

/// Request password reset use case - issues a reset token and mails a link.
///
/// If delivery fails after the token is persisted, the token is NOT rolled
/// back: it stays redeemable until it expires (e.g. re-sent through support).
/// That inconsistency window is accepted rather than silently retried.
pub struct RequestPasswordResetUseCase<'a> {
    user_store: &'a dyn UserStore,
    reset_token_store: &'a dyn ResetTokenStore,
    email_client: &'a dyn EmailClient,
    clock: &'a dyn Clock,
}

impl<'a> RequestPasswordResetUseCase<'a> {
    pub fn new(
        user_store: &'a dyn UserStore,
        reset_token_store: &'a dyn ResetTokenStore,
        email_client: &'a dyn EmailClient,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            user_store,
            reset_token_store,
            email_client,
            clock,
        }
    }

    /// Execute the request password reset use case
    ///
    /// # Arguments
    /// * `email` - Address of the account to reset
    /// * `reset_url_base` - Front-end URL the token is appended to
    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        reset_url_base: &str,
    ) -> Result<(), RequestPasswordResetError> {
        // No token is issued for unknown addresses, so a not-found outcome
        // leaks nothing a registration attempt would not.
        let user = self.user_store.get_user_by_email(&email).await?;

        let token = ResetToken::generate();
        let record = PasswordResetToken {
            token: token.clone(),
            user_id: user.id(),
            expires_at: self.clock.now() + Duration::seconds(RESET_TOKEN_TTL_SECONDS),
        };
        self.reset_token_store.store_token(record).await?;

        let link = format!(
            "{reset_url_base}?token={}",
            token.as_ref().expose_secret()
        );
        let content = format!(
            "Hello {},\n\nFollow this link to choose a new password:\n{link}\n\n\
             The link is valid for one hour. If you did not request a reset, \
             you can ignore this message.",
            user.first_name()
        );

        self.email_client
            .send_email(&email, "Password reset", &content)
            .await
            .map_err(RequestPasswordResetError::DeliveryError)?;

        Ok(())
    }
}
