use std::sync::Arc;

use crate::features::signup::models::RegistrationRequest;
use crate::features::signup::ports::EmailSyntaxChecker;
use crate::shared::envelope::FieldError;

/// Validates sign-up requests, reporting only the first failing check.
///
/// Checks run in a fixed order: presence of every required field, then
/// password confirmation, then email syntax.
pub struct RegistrationValidator {
    email_checker: Arc<dyn EmailSyntaxChecker>,
}

impl RegistrationValidator {
    pub fn new(email_checker: Arc<dyn EmailSyntaxChecker>) -> Self {
        Self { email_checker }
    }

    pub fn validate(&self, request: &RegistrationRequest) -> Result<(), FieldError> {
        if let Some((field, _)) = request
            .required_fields()
            .into_iter()
            .find(|(_, value)| value.is_empty())
        {
            return Err(FieldError::Missing(field));
        }

        if request.password != request.password_confirmation {
            return Err(FieldError::Invalid("passwordConfirmation"));
        }

        if !self.email_checker.is_valid(&request.email) {
            return Err(FieldError::Invalid("email"));
        }

        Ok(())
    }
}
