use std::sync::Arc;

use async_trait::async_trait;

use crate::features::signup::error::RegistrationError;
use crate::features::signup::models::{Account, AddAccountModel};
use crate::features::signup::ports::{AccountStore, CredentialHasher, RegisterAccount};

/// Hashes the credential and persists the new account
pub struct RegistrationService {
    hasher: Arc<dyn CredentialHasher>,
    store: Arc<dyn AccountStore>,
}

impl RegistrationService {
    pub fn new(hasher: Arc<dyn CredentialHasher>, store: Arc<dyn AccountStore>) -> Self {
        Self { hasher, store }
    }
}

#[async_trait]
impl RegisterAccount for RegistrationService {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, RegistrationError> {
        let hashed_password = self.hasher.hash(password).await?;

        let account = self
            .store
            .add(AddAccountModel {
                name: name.to_string(),
                email: email.to_string(),
                password: hashed_password,
            })
            .await?;

        tracing::info!("Account registered: id={}", account.id);

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{fake_registration_request, StubAccountStore, StubHasher};
    use tokio_test::{assert_err, assert_ok};

    fn service(hasher: &StubHasher, store: &StubAccountStore) -> RegistrationService {
        RegistrationService::new(Arc::new(hasher.clone()), Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn test_calls_hasher_with_plaintext_password() {
        let hasher = StubHasher::returning("hashed_password");
        let store = StubAccountStore::assigning("valid_id");
        let request = fake_registration_request();

        assert_ok!(
            service(&hasher, &store)
                .register(&request.name, &request.email, &request.password)
                .await
        );

        assert_eq!(*hasher.calls.lock().unwrap(), vec![request.password]);
    }

    #[tokio::test]
    async fn test_store_receives_hashed_password() {
        let hasher = StubHasher::returning("hashed_password");
        let store = StubAccountStore::assigning("valid_id");
        let request = fake_registration_request();

        service(&hasher, &store)
            .register(&request.name, &request.email, &request.password)
            .await
            .unwrap();

        let added = store.added.lock().unwrap();
        assert_eq!(
            *added,
            vec![AddAccountModel {
                name: request.name.clone(),
                email: request.email.clone(),
                password: "hashed_password".to_string(),
            }]
        );
        assert_ne!(added[0].password, request.password);
    }

    #[tokio::test]
    async fn test_returns_account_from_store() {
        let hasher = StubHasher::returning("hashed_password");
        let store = StubAccountStore::assigning("valid_id");
        let request = fake_registration_request();

        let account = service(&hasher, &store)
            .register(&request.name, &request.email, &request.password)
            .await
            .unwrap();

        assert_eq!(
            account,
            Account {
                id: "valid_id".to_string(),
                name: request.name,
                email: request.email,
                password: "hashed_password".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_hashing_failure_propagates_and_skips_store() {
        let hasher = StubHasher::failing();
        let store = StubAccountStore::assigning("valid_id");
        let request = fake_registration_request();

        let result = service(&hasher, &store)
            .register(&request.name, &request.email, &request.password)
            .await;

        assert!(matches!(assert_err!(result), RegistrationError::Hashing(_)));
        assert!(store.added.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let hasher = StubHasher::returning("hashed_password");
        let store = StubAccountStore::failing();
        let request = fake_registration_request();

        let result = service(&hasher, &store)
            .register(&request.name, &request.email, &request.password)
            .await;

        assert!(matches!(assert_err!(result), RegistrationError::Storage(_)));
    }
}
