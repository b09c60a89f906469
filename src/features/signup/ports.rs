//! Narrow collaborator interfaces consumed by the sign-up pipeline.

use async_trait::async_trait;

use crate::features::signup::error::{HashingError, RegistrationError, StorageError};
use crate::features::signup::models::{Account, AddAccountModel};

/// One-way transform of a plaintext secret into its stored form.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> Result<String, HashingError>;
}

/// Persists a new account and assigns its identifier.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn add(&self, data: AddAccountModel) -> Result<Account, StorageError>;
}

pub trait EmailSyntaxChecker: Send + Sync {
    fn is_valid(&self, value: &str) -> bool;
}

/// Registration use case as seen by the controller.
#[async_trait]
pub trait RegisterAccount: Send + Sync {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, RegistrationError>;
}
