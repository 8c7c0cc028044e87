//! API endpoint configuration.

use std::time::Duration;

/// Default base URL for the pet endpoints of the public Swagger Petstore.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2/pet";

/// Default API key, accepted by the public Petstore for delete operations.
pub const DEFAULT_API_KEY: &str = "special-key";

/// Configuration for the petstore API under test.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the pet resource (no trailing slash).
    pub base_url: String,
    /// API key sent in the `api_key` header on delete.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Creates a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates a config from the environment, falling back to the public
    /// Petstore. `PETSTORE_BASE_URL` overrides the endpoint, `PETSTORE_API_KEY`
    /// the delete key.
    pub fn from_env() -> Self {
        let mut config = match std::env::var("PETSTORE_BASE_URL") {
            Ok(url) => Self::new(url.trim_end_matches('/')),
            Err(_) => Self::default(),
        };
        if let Ok(key) = std::env::var("PETSTORE_API_KEY") {
            config.api_key = key;
        }
        config
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
