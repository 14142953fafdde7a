use std::path::PathBuf;

/// Application configuration and constants
pub struct Config {
    pub template_dir: PathBuf,
    pub port: u16,
    pub host: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            port: 5006,
            host: "0.0.0.0".to_string(),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(template_dir: PathBuf, port: Option<u16>, host: Option<String>) -> Self {
        Self {
            template_dir,
            port: port.unwrap_or(5006),
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
