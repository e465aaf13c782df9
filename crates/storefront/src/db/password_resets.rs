//! Password-reset code repository.
//!
//! Each account has at most one active code; issuing a new one replaces it
//! and resets the attempt counter.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use voltcart_core::AccountId;

use super::RepositoryError;
use crate::models::PasswordReset;

#[derive(FromRow)]
struct PasswordResetRow {
    account_id: i32,
    code_hash: String,
    attempts: i32,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<PasswordResetRow> for PasswordReset {
    fn from(row: PasswordResetRow) -> Self {
        Self {
            account_id: AccountId::new(row.account_id),
            code_hash: row.code_hash,
            attempts: row.attempts,
            expires_at: row.expires_at,
            created_at: row.created_at,
        }
    }
}

/// Repository for password-reset codes.
pub struct PasswordResetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PasswordResetRepository<'a> {
    /// Create a new password-reset repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a freshly issued code, replacing any earlier one for the account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(
        &self,
        account_id: AccountId,
        code_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO storefront.password_reset (account_id, code_hash, attempts, expires_at)
            VALUES ($1, $2, 0, $3)
            ON CONFLICT (account_id) DO UPDATE
            SET code_hash = EXCLUDED.code_hash,
                attempts = 0,
                expires_at = EXCLUDED.expires_at,
                created_at = NOW()
            ",
        )
        .bind(account_id.as_i32())
        .bind(code_hash)
        .bind(expires_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Get the active code for an account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, account_id: AccountId) -> Result<Option<PasswordReset>, RepositoryError> {
        let row: Option<PasswordResetRow> = sqlx::query_as(
            r"
            SELECT account_id, code_hash, attempts, expires_at, created_at
            FROM storefront.password_reset
            WHERE account_id = $1
            ",
        )
        .bind(account_id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(PasswordReset::from))
    }

    /// Record a wrong guess. Returns the new attempt count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no code exists for the account.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn increment_attempts(&self, account_id: AccountId) -> Result<i32, RepositoryError> {
        let attempts: Option<i32> = sqlx::query_scalar(
            r"
            UPDATE storefront.password_reset
            SET attempts = attempts + 1
            WHERE account_id = $1
            RETURNING attempts
            ",
        )
        .bind(account_id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        attempts.ok_or(RepositoryError::NotFound)
    }

    /// Delete the code for an account (after a successful reset).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, account_id: AccountId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM storefront.password_reset WHERE account_id = $1")
            .bind(account_id.as_i32())
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
