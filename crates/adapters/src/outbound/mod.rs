//! Outbound adapters.

pub mod crypto;
pub mod email;
pub mod persistence;
