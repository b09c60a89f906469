use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;

use crate::features::signup::error::RegistrationError;
use crate::features::signup::models::{Account, RegistrationRequest};
use crate::features::signup::ports::RegisterAccount;
use crate::features::signup::validator::RegistrationValidator;
use crate::shared::envelope::{Controller, ResponseEnvelope};

/// Entry point of the sign-up pipeline.
///
/// Always produces a well-formed envelope: validation errors become 400,
/// collaborator errors and panics become 500.
pub struct SignUpController {
    validator: RegistrationValidator,
    registration: Arc<dyn RegisterAccount>,
}

impl SignUpController {
    pub fn new(validator: RegistrationValidator, registration: Arc<dyn RegisterAccount>) -> Self {
        Self {
            validator,
            registration,
        }
    }

    async fn process(
        &self,
        request: RegistrationRequest,
    ) -> Result<ResponseEnvelope<Account>, RegistrationError> {
        if let Err(error) = self.validator.validate(&request) {
            return Ok(ResponseEnvelope::bad_request(error));
        }

        let account = self
            .registration
            .register(&request.name, &request.email, &request.password)
            .await?;

        Ok(ResponseEnvelope::ok(account))
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Request = RegistrationRequest;
    type Body = Account;

    async fn handle(&self, request: RegistrationRequest) -> ResponseEnvelope<Account> {
        match AssertUnwindSafe(self.process(request)).catch_unwind().await {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => ResponseEnvelope::server_error(error.to_string()),
            Err(panic) => ResponseEnvelope::server_error(panic_detail(panic.as_ref())),
        }
    }
}

fn panic_detail(panic: &(dyn Any + Send)) -> String {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("Panic during sign-up: {}", message)
}
