use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use lectern_core::{PasswordResetToken, ResetToken, ResetTokenStore, ResetTokenStoreError};

/// In-memory reset token store for tests.
#[derive(Default, Clone)]
pub struct HashMapResetTokenStore {
    tokens: Arc<RwLock<HashMap<ResetToken, PasswordResetToken>>>,
}

impl HashMapResetTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl ResetTokenStore for HashMapResetTokenStore {
    async fn store_token(&self, token: PasswordResetToken) -> Result<(), ResetTokenStoreError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token.clone(), token);
        Ok(())
    }

    async fn get_token(
        &self,
        token: &ResetToken,
    ) -> Result<PasswordResetToken, ResetTokenStoreError> {
        let tokens = self.tokens.read().await;
        tokens
            .get(token)
            .cloned()
            .ok_or(ResetTokenStoreError::TokenNotFound)
    }

    async fn consume_token(&self, token: &ResetToken) -> Result<(), ResetTokenStoreError> {
        let mut tokens = self.tokens.write().await;
        tokens
            .remove(token)
            .map(|_| ())
            .ok_or(ResetTokenStoreError::TokenNotFound)
    }
}
