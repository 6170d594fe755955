//! Signup form checks.
//!
//! Fields are checked in a fixed order and the first failure wins:
//! presence of `name`, `email`, `password`, `passwordConfirm`, then
//! confirmation equality. Email format is decided by an external
//! validator, its verdict is handed to [`SignupForm::accept`].

use crate::auth::password::Password;
use crate::error::{DomainError, Result};
use crate::identity::account::CandidateAccount;

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const PASSWORD_CONFIRM: &str = "passwordConfirm";

/// Signup fields which are present and whose password is confirmed.
#[derive(Debug)]
pub struct SignupForm {
    name: String,
    email: String,
    password: Password,
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(DomainError::MissingParam { field })
}

impl SignupForm {
    /// Check presence then password confirmation.
    ///
    /// A field is present when it is declared and non-empty. Confirmation
    /// is exact equality, without any normalization.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingParam`] for the first absent field,
    /// or [`DomainError::InvalidParam`] on `passwordConfirm` when it
    /// differs from `password`.
    pub fn parse(
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
        password_confirm: Option<String>,
    ) -> Result<Self> {
        let name = required(name, NAME)?;
        let email = required(email, EMAIL)?;
        let password = required(password, PASSWORD)?;
        let password_confirm = required(password_confirm, PASSWORD_CONFIRM)?;

        if password != password_confirm {
            return Err(DomainError::InvalidParam {
                field: PASSWORD_CONFIRM,
            });
        }

        Ok(Self {
            name,
            email,
            password: Password::new(password),
        })
    }

    /// Email address to submit to a validator.
    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Turn the form into a [`CandidateAccount`] given the email verdict.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParam`] on `email` if the address
    /// was rejected.
    pub fn accept(self, email_is_valid: bool) -> Result<CandidateAccount> {
        if !email_is_valid {
            return Err(DomainError::InvalidParam { field: EMAIL });
        }

        Ok(CandidateAccount::new(self.name, self.email, self.password))
    }
}
