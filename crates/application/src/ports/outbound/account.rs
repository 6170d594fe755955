//! Account repository port.

use async_trait::async_trait;
use domain::identity::account::{NewAccount, StoredAccount};

use crate::error::Result;

/// Port for account persistence operations.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account and return it with its assigned ID.
    ///
    /// Uniqueness, if enforced at all, is enforced here.
    async fn add(&self, account: NewAccount) -> Result<StoredAccount>;
}
