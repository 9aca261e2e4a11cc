//! Server configuration loaded from environment variables.

/// Bind configuration with loopback defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"127.0.0.1"`)
/// - `PORT` — listen port (default: `9009`)
///
/// The log filter is handled separately via `RUST_LOG` when the binary
/// initializes tracing.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9009),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9009,
        }
    }
}
