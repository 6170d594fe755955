//! HTTP routes.

pub mod create;
pub mod status;
