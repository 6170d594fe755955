//! In-process account repository.
//!
//! Used when no database is configured. Records are lost on restart.

use std::collections::HashMap;

use application::error::Result;
use application::ports::outbound::AccountRepository;
use async_trait::async_trait;
use domain::identity::account::{NewAccount, StoredAccount};
use domain::identity::id::AccountId;
use rand::RngCore;
use rand::rngs::OsRng;
use tokio::sync::RwLock;

const ID_LENGTH: usize = 16;

fn generate_id() -> AccountId {
    let mut bytes = [0u8; ID_LENGTH];
    OsRng.fill_bytes(&mut bytes);
    AccountId::new(hex::encode(bytes))
}

/// Account repository keeping records in memory.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<AccountId, StoredAccount>>,
}

impl InMemoryAccountRepository {
    /// Create a new, empty [`InMemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an account by its ID.
    pub async fn find_by_id(&self, id: &AccountId) -> Option<StoredAccount> {
        self.accounts.read().await.get(id).cloned()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: NewAccount) -> Result<StoredAccount> {
        let mut accounts = self.accounts.write().await;

        let id = loop {
            let id = generate_id();
            if !accounts.contains_key(&id) {
                break id;
            }
        };

        let stored = account.stored(id.clone());
        accounts.insert(id, stored.clone());

        tracing::debug!(account_id = %stored.id(), "account stored in memory");

        Ok(stored)
    }
}
