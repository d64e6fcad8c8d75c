//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every mutating method runs
//! in its own transaction and commits before returning; a failed statement
//! drops the transaction, which rolls it back before the connection goes
//! back to the pool.

pub mod category_repo;
pub mod task_repo;

pub use category_repo::CategoryRepo;
pub use task_repo::TaskRepo;
