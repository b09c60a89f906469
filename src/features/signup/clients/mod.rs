mod argon2_hasher;
mod email_validator;

pub use argon2_hasher::Argon2Hasher;
pub use email_validator::EmailValidatorAdapter;
