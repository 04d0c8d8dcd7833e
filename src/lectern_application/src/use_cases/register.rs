use lectern_core::{NewUser, User, UserStore, UserStoreError};

/// Error types for the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Register use case - creates a new account
pub struct RegisterUseCase<'a> {
    user_store: &'a dyn UserStore,
}

impl<'a> RegisterUseCase<'a> {
    pub fn new(user_store: &'a dyn UserStore) -> Self {
        Self { user_store }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `new_user` - A registration request that passed domain validation
    ///
    /// # Returns
    /// The stored profile, or RegisterError if the email is taken
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, new_user: NewUser) -> Result<User, RegisterError> {
        let user = self.user_store.add_user(new_user).await?;

        Ok(user)
    }
}
