use lectern_core::{Email, Password, User, UserStore, UserStoreError};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Login use case - verifies credentials and yields the account profile.
///
/// Callers must collapse `UserNotFound` and `IncorrectPassword` into one
/// uniform client response; keeping them distinct here is for logging only.
pub struct LoginUseCase<'a> {
    user_store: &'a dyn UserStore,
}

impl<'a> LoginUseCase<'a> {
    pub fn new(user_store: &'a dyn UserStore) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<User, LoginError> {
        let user = self.user_store.authenticate_user(&email, &password).await?;

        Ok(user)
    }
}
