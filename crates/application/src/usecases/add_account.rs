//! Account creation use case implementation.

use async_trait::async_trait;
use domain::identity::account::{CandidateAccount, StoredAccount};

use crate::error::Result;
use crate::ports::inbound::AddAccount;
use crate::ports::outbound::{AccountRepository, PasswordHasher};

/// Account creation use case service.
///
/// Hashes first, then persists. Failures of either step are returned as
/// is: nothing has been written before the repository call.
pub struct AddAccountUseCase {
    hasher: Box<dyn PasswordHasher>,
    account_repo: Box<dyn AccountRepository>,
}

impl AddAccountUseCase {
    pub fn new(
        hasher: Box<dyn PasswordHasher>,
        account_repo: Box<dyn AccountRepository>,
    ) -> Self {
        Self {
            hasher,
            account_repo,
        }
    }
}

#[async_trait]
impl AddAccount for AddAccountUseCase {
    async fn add(&self, candidate: CandidateAccount) -> Result<StoredAccount> {
        let password_hash = self.hasher.hash(candidate.password()).await?;

        self.account_repo
            .add(candidate.into_new_account(password_hash))
            .await
    }
}
