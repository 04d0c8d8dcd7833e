use lectern_core::{Email, NewUser, Password, User, UserRole, UserStore, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Pool, Postgres, Row};
use uuid::Uuid;

use super::{compute_password_hash, verify_password_hash};

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(user.password().clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let row = sqlx::query(
            r#"
                INSERT INTO users (email, first_name, last_name, role, study_group, password_hash)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
            "#,
        )
        .bind(user.email().as_ref().expose_secret())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.role().as_str())
        .bind(user.study_group())
        .bind(password_hash.expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        let id: Uuid = row
            .try_get("id")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        User::parse(
            id,
            user.email().clone(),
            user.first_name().to_string(),
            user.last_name().to_string(),
            user.role(),
            user.study_group().map(str::to_string),
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, first_name, last_name, role, study_group
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        user_from_row(&row)
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn get_user_by_id(&self, id: Uuid) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, first_name, last_name, role, study_group
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        user_from_row(&row)
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, first_name, last_name, role, study_group, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        verify_password_hash(Secret::from(password_hash), password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        user_from_row(&row)
    }

    #[tracing::instrument(name = "Set new password in PostgreSQL", skip_all)]
    async fn set_new_password(
        &self,
        user_id: Uuid,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $1
                WHERE id = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

fn user_from_row(row: &PgRow) -> Result<User, UserStoreError> {
    let unexpected = |e: sqlx::Error| UserStoreError::UnexpectedError(e.to_string());

    let id: Uuid = row.try_get("id").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;
    let first_name: String = row.try_get("first_name").map_err(unexpected)?;
    let last_name: String = row.try_get("last_name").map_err(unexpected)?;
    let role: String = row.try_get("role").map_err(unexpected)?;
    let study_group: Option<String> = row.try_get("study_group").map_err(unexpected)?;

    let email = Email::try_from(Secret::from(email))
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let role: UserRole = role
        .parse()
        .map_err(|e: lectern_core::UserError| UserStoreError::UnexpectedError(e.to_string()))?;

    User::parse(id, email, first_name, last_name, role, study_group)
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
}
