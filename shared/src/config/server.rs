//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
            keep_alive: default_keep_alive(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        let workers = std::env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let keep_alive = std::env::var("SERVER_KEEP_ALIVE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_keep_alive);
        let request_timeout = std::env::var("SERVER_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_request_timeout);

        Self {
            host,
            port,
            workers,
            keep_alive,
            request_timeout,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_keep_alive() -> u64 {
    75
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("127.0.0.1", 9090);
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    }

    #[test]
    fn test_from_env_reads_tuning_settings() {
        std::env::set_var("SERVER_WORKERS", "4");
        std::env::set_var("SERVER_KEEP_ALIVE", "120");
        std::env::set_var("SERVER_REQUEST_TIMEOUT", "15");

        let config = ServerConfig::from_env();
        assert_eq!(config.workers, 4);
        assert_eq!(config.keep_alive, 120);
        assert_eq!(config.request_timeout, 15);

        std::env::remove_var("SERVER_WORKERS");
        std::env::remove_var("SERVER_KEEP_ALIVE");
        std::env::remove_var("SERVER_REQUEST_TIMEOUT");
    }
}
