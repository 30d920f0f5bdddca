//! Client configuration.

use std::time::Duration;

/// Default base URL for the Spotify Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the HTTP transport.
///
/// The bearer token is not part of this struct; it lives on the
/// [`SpotifyApi`](crate::SpotifyApi) so it can be replaced between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme and host requests are sent to, e.g. `https://api.spotify.com`.
    pub base_url: String,

    /// Total time allowed for one request.
    pub timeout: Duration,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("spotify-catalog/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host (a proxy or a mock server).
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the user agent.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("spotify-catalog/"));
    }

    #[test]
    fn test_builder_setters() {
        let config = ApiConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }
}
