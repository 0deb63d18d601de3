//! # Infrastructure Layer
//!
//! Concrete implementations of the repository traits defined in
//! `rf_core`, backed by MySQL through SQLx. This crate owns connection
//! pooling and the SQL itself; all business rules live in the core.

pub mod database;

pub use database::connection::DatabasePool;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
