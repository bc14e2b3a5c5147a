//! Provider-facing configuration (data) and adapters (behavior).
//!
//! `config` holds the caller-owned [`ProviderConfiguration`]. `adapter` defines
//! [`ProviderAdapter`], the hook set the client drives to talk to one authorization server,
//! and `wordpress_com` supplies the WordPress.com implementation.

pub mod adapter;
pub mod config;
pub mod wordpress_com;

pub use adapter::*;
pub use config::*;
pub use wordpress_com::*;
