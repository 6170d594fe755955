//! Interfaces for cryptographic operations.

use async_trait::async_trait;
use domain::auth::password::{Password, PasswordHash};

use crate::error::Result;

/// Port for password hashing operations.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Irreversibly hash a password.
    async fn hash(&self, password: &Password) -> Result<PasswordHash>;
}
