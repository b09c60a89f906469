use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted account as seen by the sign-up pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Identifier assigned by the account store
    pub id: String,
    pub name: String,
    pub email: String,
    /// Hashed credential, never the plaintext
    pub password: String,
}

/// Data handed to the account store; `password` is already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Database model for account
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct AccountRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}
