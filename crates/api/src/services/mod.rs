//! CRUD orchestrators, one per entity kind.
//!
//! Each mutating operation runs validate -> existence check -> persist inside
//! a single transaction, so a failure at any step leaves no partial write.

pub mod car;
pub mod category;
pub mod make;

pub use car::CarService;
pub use category::CategoryService;
pub use make::MakeService;
