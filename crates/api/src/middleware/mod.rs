//! Request middleware: the bearer-token authentication extractor.

pub mod auth;
