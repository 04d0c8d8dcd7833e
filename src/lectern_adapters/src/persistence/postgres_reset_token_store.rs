use chrono::{DateTime, Utc};
use lectern_core::{PasswordResetToken, ResetToken, ResetTokenStore, ResetTokenStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Pool, Postgres, Row};
use uuid::Uuid;

pub struct PostgresResetTokenStore {
    pool: PgPool,
}

impl PostgresResetTokenStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresResetTokenStore { pool }
    }
}

#[async_trait::async_trait]
impl ResetTokenStore for PostgresResetTokenStore {
    #[tracing::instrument(name = "Storing reset token in PostgreSQL", skip_all)]
    async fn store_token(&self, token: PasswordResetToken) -> Result<(), ResetTokenStoreError> {
        sqlx::query(
            r#"
                INSERT INTO password_reset_tokens (token, user_id, expires_at)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(token.token.as_ref().expose_secret())
        .bind(token.user_id)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving reset token from PostgreSQL", skip_all)]
    async fn get_token(
        &self,
        token: &ResetToken,
    ) -> Result<PasswordResetToken, ResetTokenStoreError> {
        let row = sqlx::query(
            r#"
                SELECT token, user_id, expires_at
                FROM password_reset_tokens
                WHERE token = $1
            "#,
        )
        .bind(token.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(ResetTokenStoreError::TokenNotFound);
        };

        let unexpected = |e: sqlx::Error| ResetTokenStoreError::UnexpectedError(e.to_string());
        let raw: String = row.try_get("token").map_err(unexpected)?;
        let user_id: Uuid = row.try_get("user_id").map_err(unexpected)?;
        let expires_at: DateTime<Utc> = row.try_get("expires_at").map_err(unexpected)?;

        let token = ResetToken::parse(Secret::from(raw))
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        Ok(PasswordResetToken {
            token,
            user_id,
            expires_at,
        })
    }

    // A single DELETE arbitrates concurrent confirmations: exactly one
    // caller sees a row removed, everyone else gets TokenNotFound.
    #[tracing::instrument(name = "Consuming reset token in PostgreSQL", skip_all)]
    async fn consume_token(&self, token: &ResetToken) -> Result<(), ResetTokenStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM password_reset_tokens
                WHERE token = $1
            "#,
        )
        .bind(token.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ResetTokenStoreError::TokenNotFound);
        }

        Ok(())
    }
}
