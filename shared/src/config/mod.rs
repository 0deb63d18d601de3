//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration

pub mod database;
pub mod environment;
pub mod server;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
