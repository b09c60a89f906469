use thiserror::Error;

/// Raised by a [`CredentialHasher`](super::ports::CredentialHasher)
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HashingError(pub String);

/// Raised by an [`AccountStore`](super::ports::AccountStore)
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Failures raised by the registration collaborators
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Hashing failure: {0}")]
    Hashing(#[from] HashingError),

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}
