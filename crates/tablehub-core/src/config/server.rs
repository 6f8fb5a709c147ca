//! HTTP server and CORS configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Requests running longer than this are aborted.
    pub request_timeout_seconds: u64,
    /// How long open connections may drain after a shutdown signal.
    pub shutdown_grace_seconds: u64,
    /// Cross-origin policy for browser booking forms.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 30,
            shutdown_grace_seconds: 30,
            cors: CorsConfig::default(),
        }
    }
}

/// CORS configuration. A `"*"` entry allows any origin or header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime.
    pub max_age_seconds: u64,
}

impl CorsConfig {
    /// Whether every origin is accepted.
    pub fn any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Whether every request header is accepted.
    pub fn any_header(&self) -> bool {
        self.allowed_headers.iter().any(|h| h == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["*".to_string()],
            max_age_seconds: 3600,
        }
    }
}
