use lectern_core::{Password, UserStore, UserStoreError};
use uuid::Uuid;

/// Error types for the change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Change password use case - rotates the credential of a logged-in user.
///
/// The current password is re-verified with the same comparison used at
/// login before anything is written.
pub struct ChangePasswordUseCase<'a> {
    user_store: &'a dyn UserStore,
}

impl<'a> ChangePasswordUseCase<'a> {
    pub fn new(user_store: &'a dyn UserStore) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, current_password, new_password)
    )]
    pub async fn execute(
        &self,
        user_id: Uuid,
        current_password: Password,
        new_password: Password,
    ) -> Result<(), ChangePasswordError> {
        let user = self.user_store.get_user_by_id(user_id).await?;

        self.user_store
            .authenticate_user(user.email(), &current_password)
            .await?;

        self.user_store.set_new_password(user_id, new_password).await?;

        Ok(())
    }
}
