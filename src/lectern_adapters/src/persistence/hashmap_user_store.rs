use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use lectern_core::{Email, NewUser, Password, User, UserStore, UserStoreError};
use secrecy::Secret;
use uuid::Uuid;

use super::{compute_password_hash, verify_password_hash};

struct StoredUser {
    user: User,
    password_hash: Secret<String>,
}

/// In-memory user store for tests. Uses the same Argon2 transform as the
/// Postgres store, so the full hash/verify path is exercised.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, StoredUser>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(new_user.password().clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let mut users = self.users.write().await;
        if users.contains_key(new_user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = User::parse(
            Uuid::new_v4(),
            new_user.email().clone(),
            new_user.first_name().to_string(),
            new_user.last_name().to_string(),
            new_user.role(),
            new_user.study_group().map(str::to_string),
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        users.insert(
            new_user.email().clone(),
            StoredUser {
                user: user.clone(),
                password_hash,
            },
        );

        Ok(user)
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .map(|stored| stored.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|stored| stored.user.id() == id)
            .map(|stored| stored.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let (user, password_hash) = {
            let users = self.users.read().await;
            let stored = users.get(email).ok_or(UserStoreError::UserNotFound)?;
            (stored.user.clone(), stored.password_hash.clone())
        };

        verify_password_hash(password_hash, password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        Ok(user)
    }

    async fn set_new_password(
        &self,
        user_id: Uuid,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let mut users = self.users.write().await;
        let stored = users
            .values_mut()
            .find(|stored| stored.user.id() == user_id)
            .ok_or(UserStoreError::UserNotFound)?;

        stored.password_hash = password_hash;
        Ok(())
    }
}
