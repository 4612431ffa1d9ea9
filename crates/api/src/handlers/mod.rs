//! HTTP handlers, one module per resource.

pub mod car;
pub mod category;
pub mod make;
