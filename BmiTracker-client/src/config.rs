use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the server base URL
pub const SERVER_URL_VAR: &str = "BMI_SERVER_URL";

/// Where the reference server listens by default
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The server URL could not be used as an HTTP base URL
    #[error("Invalid server URL {url:?}: {reason}")]
    InvalidServerUrl { url: String, reason: String },
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash
    server_url: String,
}

impl ClientConfig {
    /// Build a configuration for the given base URL
    pub fn new(server_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidServerUrl {
            url: server_url.to_string(),
            reason,
        };

        let parsed = Url::parse(server_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }
        if parsed.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }

        Ok(Self {
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Read the configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url =
            std::env::var(SERVER_URL_VAR).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::new(&server_url)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Absolute URL for an endpoint path such as `/history`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.server_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}
