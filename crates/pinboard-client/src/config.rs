use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::{ClientError, Result};

pub const SERVER_URL_DEFAULT: &str = "http://localhost:8989";
pub const TIMEOUT_DEFAULT: Duration = Duration::from_secs(10);

/// Where and how to reach the places server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the server, without a trailing slash
    pub server_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: SERVER_URL_DEFAULT.to_string(),
            timeout: TIMEOUT_DEFAULT,
        }
    }
}

impl ClientConfig {
    /// Build a configuration for `server_url`, validating the scheme.
    pub fn new(server_url: impl Into<String>) -> Result<Self> {
        let config = Self {
            server_url: normalize_url(server_url.into())?,
            ..Self::default()
        };
        Ok(config)
    }

    /// Read `PINBOARD_SERVER_URL` and `PINBOARD_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let server_url =
            std::env::var("PINBOARD_SERVER_URL").unwrap_or_else(|_| SERVER_URL_DEFAULT.to_string());
        let mut config = Self::new(server_url)?;

        if let Ok(raw) = std::env::var("PINBOARD_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "Ignoring invalid PINBOARD_TIMEOUT_SECS"),
            }
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join an endpoint path onto the server URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.server_url, path.trim_start_matches('/'))
    }
}

fn normalize_url(url: String) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let parsed =
        Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(format!(
            "{url}: unsupported scheme {}",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ClientError::InvalidUrl(format!("{url}: missing host")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, "http://localhost:8989");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://places.example.org/").unwrap();
        assert_eq!(config.server_url, "https://places.example.org");
        assert_eq!(
            config.endpoint("/places/"),
            "https://places.example.org/places/"
        );
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        assert!(matches!(
            ClientConfig::new("ftp://places.example.org"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(ClientConfig::new("places.example.org").is_err());
    }

    #[test]
    fn test_rejects_malformed_host() {
        assert!(ClientConfig::new("http://").is_err());
        assert!(ClientConfig::new("http://   ").is_err());
        assert!(ClientConfig::new("http://bad host.org").is_err());
        assert!(ClientConfig::new("http://places.example.org:notaport").is_err());
    }

    #[test]
    fn test_accepts_host_with_port_and_path() {
        let config = ClientConfig::new("  http://127.0.0.1:8989/api/ ").unwrap();
        assert_eq!(config.server_url, "http://127.0.0.1:8989/api");
        assert_eq!(config.endpoint("places/"), "http://127.0.0.1:8989/api/places/");
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
