use std::sync::Arc;

use sqlx::PgPool;

use crate::core::config::HashingConfig;
use crate::core::decorators::FailureLoggingDecorator;
use crate::features::signup::clients::{Argon2Hasher, EmailValidatorAdapter};
use crate::features::signup::controller::SignUpController;
use crate::features::signup::repositories::{PgAccountRepository, PgErrorLogRepository};
use crate::features::signup::services::RegistrationService;
use crate::features::signup::validator::RegistrationValidator;
use crate::features::signup::SharedSignUpController;

/// Wire the production sign-up controller, decorated with failure logging
pub fn make_signup_controller(
    pool: PgPool,
    hashing: &HashingConfig,
) -> Result<SharedSignUpController, String> {
    let hasher = Arc::new(Argon2Hasher::new(hashing)?);
    let account_repository = Arc::new(PgAccountRepository::new(pool.clone()));
    let registration = Arc::new(RegistrationService::new(hasher, account_repository));

    let validator = RegistrationValidator::new(Arc::new(EmailValidatorAdapter));
    let controller = SignUpController::new(validator, registration);

    let error_log_repository = PgErrorLogRepository::new(pool);
    let decorated: SharedSignUpController = Arc::new(FailureLoggingDecorator::new(
        controller,
        error_log_repository,
    ));

    Ok(decorated)
}
