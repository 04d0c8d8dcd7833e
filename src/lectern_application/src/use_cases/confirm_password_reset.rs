use lectern_core::{
    Clock, Password, ResetToken, ResetTokenStore, ResetTokenStoreError, UserStore, UserStoreError,
};

/// Error types for the confirm password reset use case
#[derive(Debug, thiserror::Error)]
pub enum ConfirmPasswordResetError {
    /// Covers unknown, expired and already-consumed tokens alike.
    #[error("Invalid or expired reset token")]
    InvalidToken,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Reset token store error: {0}")]
    ResetTokenStoreError(ResetTokenStoreError),
}

/// Confirm password reset use case - redeems a token for a credential change.
///
/// The credential is written first and the token row removed only afterwards,
/// in one atomic delete. A partial failure can therefore never leave a
/// valid-forever token behind a changed credential, and a lost delete race
/// means another confirmation already consumed the token.
pub struct ConfirmPasswordResetUseCase<'a> {
    user_store: &'a dyn UserStore,
    reset_token_store: &'a dyn ResetTokenStore,
    clock: &'a dyn Clock,
}

impl<'a> ConfirmPasswordResetUseCase<'a> {
    pub fn new(
        user_store: &'a dyn UserStore,
        reset_token_store: &'a dyn ResetTokenStore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            user_store,
            reset_token_store,
            clock,
        }
    }

    #[tracing::instrument(name = "ConfirmPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: ResetToken,
        new_password: Password,
    ) -> Result<(), ConfirmPasswordResetError> {
        let record = self
            .reset_token_store
            .get_token(&token)
            .await
            .map_err(into_token_error)?;

        if record.is_expired(self.clock.now()) {
            // Expired rows stay behind for garbage collection; they can
            // never validate again.
            return Err(ConfirmPasswordResetError::InvalidToken);
        }

        self.user_store
            .set_new_password(record.user_id, new_password)
            .await?;

        self.reset_token_store
            .consume_token(&token)
            .await
            .map_err(into_token_error)?;

        Ok(())
    }
}

fn into_token_error(error: ResetTokenStoreError) -> ConfirmPasswordResetError {
    match error {
        ResetTokenStoreError::TokenNotFound => ConfirmPasswordResetError::InvalidToken,
        other => ConfirmPasswordResetError::ResetTokenStoreError(other),
    }
}
