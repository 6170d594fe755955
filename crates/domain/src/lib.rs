//! Signup domain (core).
//!
//! Holds the value objects flowing through a registration and the pure
//! validation rules applied before any collaborator is called.

#![forbid(unsafe_code)]

pub mod auth;
pub mod error;
pub mod identity;
