//! Concrete implementations of the signup outbound ports.

#![forbid(unsafe_code)]

pub mod outbound;
