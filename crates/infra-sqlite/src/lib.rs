// Jobboard Infrastructure - SQLite Adapter
// Implements the core JobRepository port on top of sqlx.

mod connection;
mod error;
mod job_repository;
mod migration;
pub mod sql;

pub use connection::create_pool;
pub use job_repository::SqliteJobRepository;
pub use migration::run_migrations;

// Note: sqlx::Error conversion is handled by a helper in this crate
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
