//! Token models and secret wrappers produced by the authorization flow.

pub mod secret;
pub mod token;

pub use secret::*;
pub use token::*;
