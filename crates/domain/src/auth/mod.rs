//! Credential domain.

pub mod password;
