//! PostgreSQL implementation for account repository.

use application::error::{ApplicationError, Result};
use application::ports::outbound::AccountRepository;
use async_trait::async_trait;
use domain::identity::account::{NewAccount, StoredAccount};
use sqlx::PgPool;

use super::models::AccountRecord;

/// PostgreSQL account repository.
///
/// IDs are generated by the database.
#[derive(Debug, Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn add(&self, account: NewAccount) -> Result<StoredAccount> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO accounts (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(account.name())
        .bind(account.email())
        .bind(account.password().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(ApplicationError::persistence)?;

        Ok(record.into())
    }
}
