//! Email format validation backed by the `validator` crate.

use application::error::Result;
use application::ports::outbound::EmailValidator;
use validator::ValidateEmail;

/// Adapter forwarding to `validator`'s HTML5/RFC 5322 email check.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    /// Create a new [`EmailValidatorAdapter`].
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_email() {
        let sut = EmailValidatorAdapter::new();
        assert!(sut.is_valid("valid-email@gmail.com").unwrap());
        assert!(sut.is_valid("a@b.com").unwrap());
    }

    #[test]
    fn test_rejects_invalid_email() {
        let sut = EmailValidatorAdapter::new();
        assert!(!sut.is_valid("invalid-email").unwrap());
        assert!(!sut.is_valid("two@at@gmail.com").unwrap());
        assert!(!sut.is_valid("").unwrap());
    }

    #[test]
    fn test_matches_library_verdict() {
        let sut = EmailValidatorAdapter::new();
        for email in ["any-email@gmail.com", "@gmail.com", "no-domain@"] {
            assert_eq!(sut.is_valid(email).unwrap(), email.validate_email());
        }
    }
}
