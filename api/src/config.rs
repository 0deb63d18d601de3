//! API configuration loaded from the environment.

use rf_shared::config::database::DatabaseConfig;
use rf_shared::config::environment::Environment;
use rf_shared::config::server::ServerConfig;

/// Top-level configuration for the API binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment (development, staging, production)
    pub environment: Environment,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Database connection settings
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_env();
        assert!(!config.server.bind_address().is_empty());
        assert!(config.database.max_connections > 0);
    }
}
