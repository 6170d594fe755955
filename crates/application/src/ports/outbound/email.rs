//! Email address format check.

use crate::error::Result;

/// Port for email format validation.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is a syntactically valid address.
    ///
    /// A malformed address is `Ok(false)`; `Err` is kept for failures of
    /// the validator itself.
    fn is_valid(&self, email: &str) -> Result<bool>;
}
