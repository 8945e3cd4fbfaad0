//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached files, 0 = unbounded
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Directory served at `/`
    pub static_dir: PathBuf,
    /// Largest accepted upload request body in bytes
    pub max_upload_bytes: usize,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached files (default: 3)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `STATIC_DIR` - Static file directory (default: ./static)
    /// - `MAX_UPLOAD_BYTES` - Upload body limit (default: 1 MiB)
    /// - `SHUTDOWN_TIMEOUT` - Graceful shutdown deadline in seconds (default: 7)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_capacity: env_or("CACHE_CAPACITY", defaults.cache_capacity),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            static_dir: env_or("STATIC_DIR", defaults.static_dir),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
            shutdown_timeout: env_or("SHUTDOWN_TIMEOUT", defaults.shutdown_timeout),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 3,
            server_port: 8080,
            static_dir: PathBuf::from("./static"),
            max_upload_bytes: 1024 * 1024,
            shutdown_timeout: 7,
        }
    }
}
