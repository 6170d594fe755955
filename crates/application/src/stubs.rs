//! Test doubles for every port, recording what they receive.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use domain::auth::password::{Password, PasswordHash};
use domain::identity::account::{CandidateAccount, NewAccount, StoredAccount};
use domain::identity::id::AccountId;
use domain::identity::signup::SignupForm;

use crate::error::{ApplicationError, Result};
use crate::ports::inbound::AddAccount;
use crate::ports::outbound::{AccountRepository, EmailValidator, PasswordHasher};

pub type Calls<T> = Arc<Mutex<Vec<T>>>;

fn failure(message: &'static str) -> std::io::Error {
    std::io::Error::other(message)
}

pub fn candidate(name: &str, email: &str, password: &str) -> CandidateAccount {
    SignupForm::parse(
        Some(name.into()),
        Some(email.into()),
        Some(password.into()),
        Some(password.into()),
    )
    .and_then(|form| form.accept(true))
    .unwrap()
}

pub fn stored_account() -> StoredAccount {
    StoredAccount::new(
        AccountId::new("valid-id"),
        "valid-name",
        "valid-email@gmail.com",
        PasswordHash::new("valid-password"),
    )
}

/// Returns a fixed verdict, or fails when there is none.
pub struct EmailValidatorStub {
    verdict: Option<bool>,
    calls: Calls<String>,
}

impl EmailValidatorStub {
    pub fn valid() -> Self {
        Self::with(Some(true))
    }

    pub fn invalid() -> Self {
        Self::with(Some(false))
    }

    pub fn failing() -> Self {
        Self::with(None)
    }

    fn with(verdict: Option<bool>) -> Self {
        Self {
            verdict,
            calls: Calls::default(),
        }
    }

    pub fn calls(&self) -> Calls<String> {
        Arc::clone(&self.calls)
    }
}

impl EmailValidator for EmailValidatorStub {
    fn is_valid(&self, email: &str) -> Result<bool> {
        self.calls.lock().unwrap().push(email.to_owned());
        self.verdict.ok_or_else(|| {
            ApplicationError::EmailValidation(Box::new(failure(
                "validator crashed",
            )))
        })
    }
}

/// Returns a fixed account, or fails when there is none.
pub struct AddAccountStub {
    account: Option<StoredAccount>,
    calls: Calls<CandidateAccount>,
}

impl AddAccountStub {
    pub fn returning(account: StoredAccount) -> Self {
        Self {
            account: Some(account),
            calls: Calls::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            account: None,
            calls: Calls::default(),
        }
    }

    pub fn calls(&self) -> Calls<CandidateAccount> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl AddAccount for AddAccountStub {
    async fn add(&self, candidate: CandidateAccount) -> Result<StoredAccount> {
        self.calls.lock().unwrap().push(candidate);
        self.account
            .clone()
            .ok_or_else(|| ApplicationError::persistence(failure("db down")))
    }
}

/// Prefixes the password with `hashed-`.
pub struct PasswordHasherStub {
    fail: bool,
    calls: Calls<Password>,
}

impl PasswordHasherStub {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: Calls::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Calls<Password> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl PasswordHasher for PasswordHasherStub {
    async fn hash(&self, password: &Password) -> Result<PasswordHash> {
        self.calls.lock().unwrap().push(password.clone());
        if self.fail {
            return Err(ApplicationError::hashing(failure("hasher down")));
        }

        Ok(PasswordHash::new(format!("hashed-{}", password.as_str())))
    }
}

/// Assigns `valid-id` to every account.
pub struct AccountRepositoryStub {
    fail: bool,
    calls: Calls<NewAccount>,
}

impl AccountRepositoryStub {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: Calls::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Calls<NewAccount> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryStub {
    async fn add(&self, account: NewAccount) -> Result<StoredAccount> {
        self.calls.lock().unwrap().push(account.clone());
        if self.fail {
            return Err(ApplicationError::persistence(failure("db down")));
        }

        Ok(account.stored(AccountId::new("valid-id")))
    }
}
