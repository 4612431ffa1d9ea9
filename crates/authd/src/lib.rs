//! Garage authentication proxy library.
//!
//! Exchanges user credentials for an OAuth2 token from the configured
//! identity provider and forwards the token response to the caller. Exposes
//! the building blocks so integration tests and the binary entrypoint share
//! the same router.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
