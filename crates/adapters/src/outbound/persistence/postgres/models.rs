//! Rows mapped from the `accounts` table.

use domain::auth::password::PasswordHash;
use domain::identity::account::StoredAccount;
use domain::identity::id::AccountId;

/// Row of the `accounts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<AccountRecord> for StoredAccount {
    fn from(record: AccountRecord) -> Self {
        StoredAccount::new(
            AccountId::new(record.id),
            record.name,
            record.email,
            PasswordHash::new(record.password),
        )
    }
}
