//! Authentication module
//!
//! Supports: Bearer (personal access token), no auth
//!
//! The `Authenticator` applies the configured credentials to every outgoing
//! request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
