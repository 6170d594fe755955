//! Argon2id password hasher implementation.

use application::error::{ApplicationError, Result, ToInternal};
use application::ports::outbound::PasswordHasher;
use argon2::password_hash::{
    PasswordHasher as Argon2PasswordHasherTrait, SaltString,
};
use argon2::{Argon2, Params, Version};
use async_trait::async_trait;
use domain::auth::password::{Password, PasswordHash};
use rand::rngs::OsRng;

use super::CryptoError;

/// Argon2id password hasher adapter.
///
/// Hashing is CPU-bound, it runs on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Create a new Argon2 hasher with custom parameters.
    pub fn new(
        memory_cost: u32,
        iterations: u32,
        parallelism: u32,
        output_length: usize,
    ) -> std::result::Result<Self, CryptoError> {
        let params = Params::new(
            memory_cost,
            iterations,
            parallelism,
            Some(output_length),
        )
        .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(Self { params })
    }
}

fn hash_password(
    params: Params,
    password: &[u8],
) -> std::result::Result<PasswordHash, CryptoError> {
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    let hash = argon2
        .hash_password(password, &salt)
        .map_err(|err| CryptoError::Argon2(err.to_string()))?;

    Ok(PasswordHash::new(hash.to_string()))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash> {
        let params = self.params.clone();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            hash_password(params, password.as_bytes())
        })
        .await
        .catch()?
        .map_err(ApplicationError::hashing)
    }
}
