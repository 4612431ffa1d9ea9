//! Authentication primitives.
//!
//! - [`jwt`] -- bearer-token claims and HS256 validation. Tokens are issued
//!   by the authentication proxy; this service only verifies them.

pub mod jwt;
