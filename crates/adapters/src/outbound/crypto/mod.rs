//! Cryptographic adapters.

mod argon2;

pub use self::argon2::Argon2PasswordHasher;

/// Errors raised by cryptographic libraries.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("argon2 error: {0}")]
    Argon2(String),
}
