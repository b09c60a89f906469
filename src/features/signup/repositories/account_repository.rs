use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::signup::error::StorageError;
use crate::features::signup::models::{Account, AccountRow, AddAccountModel};
use crate::features::signup::ports::AccountStore;

/// Postgres-backed account store.
///
/// Email uniqueness is enforced by the `accounts_email_key` index; a
/// duplicate surfaces as a storage failure like any other database error.
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountRepository {
    async fn add(&self, data: AddAccountModel) -> Result<Account, StorageError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert account: {:?}", e);
            StorageError(e.to_string())
        })?;

        Ok(row.into())
    }
}
