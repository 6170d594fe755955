//! PostgreSQL persistence.

mod account_repository;
mod models;

pub use account_repository::PgAccountRepository;
