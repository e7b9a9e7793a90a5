//! Server Configuration
//!
//! Bind address for the HTTP server, read from CLI flags or the environment.

use clap::Parser;

/// Bookshelf API server
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bookshelf-api")]
#[command(about = "In-memory bookshelf REST API")]
#[command(version)]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, env = "BOOKSHELF_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "BOOKSHELF_PORT", default_value_t = 9000)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config =
            ServerConfig::try_parse_from(["bookshelf-api", "--host", "127.0.0.1", "-p", "8080"])
                .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_default_socket_addr() {
        assert_eq!(ServerConfig::default().socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(ServerConfig::try_parse_from(["bookshelf-api", "--port", "http"]).is_err());
    }
}
