//! Signup application layer.
//!
//! Orchestrates a registration: the controller validates the request and
//! maps every outcome to an [`http::HttpResponse`], the use case hashes the
//! password and persists the account. Collaborators are reached through
//! [`ports::outbound`].

#![forbid(unsafe_code)]

pub mod dto;
pub mod error;
pub mod http;
pub mod ports;
pub mod usecases;

#[cfg(test)]
pub(crate) mod stubs;
