//! Shared utilities and common types for the RentFlow server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Common type definitions

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, Environment, ServerConfig};
pub use types::{ApiResponse, ErrorResponse};
