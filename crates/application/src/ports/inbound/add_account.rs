//! Account creation use case port.

use async_trait::async_trait;
use domain::identity::account::{CandidateAccount, StoredAccount};

use crate::error::Result;

/// Inbound port for account creation.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Hash the candidate password then persist the account.
    async fn add(&self, candidate: CandidateAccount) -> Result<StoredAccount>;
}
