//! Client configuration.
//!
//! Configuration is an explicit value. [`XenditConfig::from_env`] covers the
//! case where the key lives in the process environment.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;
use zeroize::Zeroize;

use crate::error::Error;

/// Default base URL for the Xendit API.
pub const DEFAULT_BASE_URL: &str = "https://api.xendit.co";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Secret API key that never exposes its value in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    inner: String,
}

impl ApiKey {
    /// Wrap a secret key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// The key value. Only call this when sending the key to the API.
    #[inline]
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Check if the key is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

/// Connection settings shared by every request a client makes.
#[derive(Debug, Clone)]
pub struct XenditConfig {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
}

impl XenditConfig {
    /// Create a configuration for the default base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = ApiKey::new(api_key);
        if api_key.is_empty() {
            return Err(Error::Configuration("API key must not be empty".to_string()));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Point the client at a different API host (sandbox, mock server).
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if `base_url` is not an absolute
    /// http(s) URL, or if it carries a query or fragment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::Configuration(format!("Invalid base URL {base_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Configuration(format!(
                "Invalid base URL {base_url:?}: scheme must be http or https"
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(Error::Configuration(format!(
                "Invalid base URL {base_url:?}: must not have a query or fragment"
            )));
        }

        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Set the timeout applied to each request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `XENDIT_API_KEY` - Secret API key (required)
    /// * `XENDIT_BASE_URL` - Base URL (optional, default: <https://api.xendit.co>)
    /// * `XENDIT_TIMEOUT_SECS` - Request timeout in seconds (optional, default: 30)
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if a required variable is missing or a
    /// value is invalid.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var("XENDIT_API_KEY").map_err(|_| {
            Error::Configuration("XENDIT_API_KEY environment variable not set".to_string())
        })?;

        let mut config = Self::new(api_key)?;

        if let Ok(base_url) = env::var("XENDIT_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }

        if let Ok(timeout) = env::var("XENDIT_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|_| {
                Error::Configuration(format!(
                    "Invalid XENDIT_TIMEOUT_SECS: {timeout}. Must be a whole number of seconds"
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Get the API key.
    #[must_use]
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Get the base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
