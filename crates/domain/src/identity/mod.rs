//! Identity domain: who is signing up and what gets stored.

pub mod account;
pub mod id;
pub mod signup;
