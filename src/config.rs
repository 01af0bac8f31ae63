//! Application configuration.
//!
//! Resolves the NASA library base URL and optional planets document URL,
//! with environment overrides for development against local mocks.

/// Default base URL for the NASA image and video library search API.
pub const NASA_LIBRARY_URL: &str = "https://images-api.nasa.gov/search";

/// Environment variable overriding the library base URL.
pub const ENV_LIBRARY_URL: &str = "INFOSPACE_LIBRARY_URL";

/// Environment variable overriding the planets document URL.
pub const ENV_PLANETS_URL: &str = "INFOSPACE_PLANETS_URL";

/// Configuration for the provider layer.
///
/// Use the builder methods to customize endpoints, e.g. when pointing the
/// client at a mock server in tests.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the library search endpoint, normalized to end with `/`.
    pub library_base_url: String,
    /// URL of the planets JSON document, if planet screens are enabled.
    pub planets_url: Option<String>,
    /// Request timeout in seconds for the HTTP client.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library_base_url: normalize_base_url(NASA_LIBRARY_URL),
            planets_url: None,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Create a config from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_LIBRARY_URL) {
            config.library_base_url = normalize_base_url(&url);
        }

        if let Ok(url) = std::env::var(ENV_PLANETS_URL) {
            config.planets_url = Some(url);
        }

        config
    }

    /// Set the library base URL (normalized to end with `/`).
    pub fn with_library_base_url(mut self, url: impl Into<String>) -> Self {
        self.library_base_url = normalize_base_url(&url.into());
        self
    }

    /// Set the planets document URL.
    pub fn with_planets_url(mut self, url: impl Into<String>) -> Self {
        self.planets_url = Some(url.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

/// Ensure a base URL ends with a trailing slash so relative paths append
/// cleanly.
fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_normalized() {
        let config = AppConfig::default();
        assert!(config.library_base_url.ends_with('/'));
        assert!(config.planets_url.is_none());
    }

    #[test]
    fn with_library_base_url_adds_trailing_slash() {
        let config = AppConfig::default().with_library_base_url("http://localhost:8080/search");
        assert_eq!(config.library_base_url, "http://localhost:8080/search/");
    }

    #[test]
    fn with_library_base_url_keeps_existing_slash() {
        let config = AppConfig::default().with_library_base_url("http://localhost:8080/search/");
        assert_eq!(config.library_base_url, "http://localhost:8080/search/");
    }

    #[test]
    fn with_planets_url_enables_planets() {
        let config = AppConfig::default().with_planets_url("http://localhost:8080/planets.json");
        assert_eq!(
            config.planets_url.as_deref(),
            Some("http://localhost:8080/planets.json")
        );
    }
}
