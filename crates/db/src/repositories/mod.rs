//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept the executor as the first argument, so the same method works
//! against a pool or inside a transaction.

pub mod car_repo;
pub mod category_repo;
pub mod make_repo;

pub use car_repo::CarRepo;
pub use category_repo::CategoryRepo;
pub use make_repo::MakeRepo;
