//! Application services implementing business logic.

pub mod add_account;
pub mod signup;

pub use add_account::*;
pub use signup::*;
