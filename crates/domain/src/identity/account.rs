//! Account entities, from validated candidate to stored record.

use crate::auth::password::{Password, PasswordHash};
use crate::identity::id::AccountId;

/// An account which passed every signup check.
///
/// Only obtainable through [`SignupForm::accept`](crate::identity::signup::SignupForm::accept).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAccount {
    name: String,
    email: String,
    password: Password,
}

impl CandidateAccount {
    pub(crate) fn new(name: String, email: String, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plaintext password, to be hashed.
    #[inline]
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Swap the plaintext password for its hash.
    ///
    /// The plaintext is dropped with `self`.
    pub fn into_new_account(self, password: PasswordHash) -> NewAccount {
        NewAccount {
            name: self.name,
            email: self.email,
            password,
        }
    }
}

/// Persistence request handed to an account repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    name: String,
    email: String,
    password: PasswordHash,
}

impl NewAccount {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    /// Attach the identifier assigned by storage.
    pub fn stored(self, id: AccountId) -> StoredAccount {
        StoredAccount {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Account as persisted, with its identifier and hashed password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAccount {
    id: AccountId,
    name: String,
    email: String,
    password: PasswordHash,
}

impl StoredAccount {
    /// Rebuild a [`StoredAccount`] from storage.
    pub fn new(
        id: AccountId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: PasswordHash,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password,
        }
    }

    #[inline]
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }
}
