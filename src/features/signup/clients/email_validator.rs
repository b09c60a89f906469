use validator::ValidateEmail;

use crate::features::signup::ports::EmailSyntaxChecker;

/// Email syntax check backed by the `validator` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailSyntaxChecker for EmailValidatorAdapter {
    fn is_valid(&self, value: &str) -> bool {
        value.validate_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::{SafeEmail, Username};
    use fake::Fake;

    #[test]
    fn test_accepts_valid_email() {
        let adapter = EmailValidatorAdapter;
        assert!(adapter.is_valid("kaua@gmail.com"));
        assert!(adapter.is_valid(&SafeEmail().fake::<String>()));
    }

    #[test]
    fn test_rejects_invalid_email() {
        let adapter = EmailValidatorAdapter;
        assert!(!adapter.is_valid(&Username().fake::<String>()));
        assert!(!adapter.is_valid("kaua@"));
        assert!(!adapter.is_valid("@gmail.com"));
        assert!(!adapter.is_valid(""));
    }
}
