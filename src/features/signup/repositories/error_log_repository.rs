use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::core::decorators::{LogSink, LogSinkError};

/// Stores internal failure details in the `error_logs` table
pub struct PgErrorLogRepository {
    pool: PgPool,
}

impl PgErrorLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogSink for PgErrorLogRepository {
    async fn log(&self, detail: &str) -> Result<(), LogSinkError> {
        tracing::error!("Internal failure: {}", detail);

        sqlx::query("INSERT INTO error_logs (stack, created_at) VALUES ($1, $2)")
            .bind(detail)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| LogSinkError(e.to_string()))?;

        Ok(())
    }
}
