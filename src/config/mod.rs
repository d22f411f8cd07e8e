//! Configuration types for the MailerLite client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MailerLiteConfig`]: The configuration struct holding all client settings
//! - [`MailerLiteConfigBuilder`]: A builder for constructing [`MailerLiteConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use mailerlite::{ApiKey, MailerLiteConfig};
//! use std::time::Duration;
//!
//! let config = MailerLiteConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Base URL of the MailerLite v2 API.
pub const MAILERLITE_API_V2_URL: &str = "https://api.mailerlite.com/api/v2";

/// Environment variable read by [`MailerLiteConfig::from_env`] for the API key.
pub const API_KEY_ENV: &str = "MAILERLITE_API_KEY";

/// Environment variable read by [`MailerLiteConfig::from_env`] for the base URL.
pub const BASE_URL_ENV: &str = "MAILERLITE_BASE_URL";

/// Configuration for the MailerLite client.
///
/// There is no default timeout: requests wait as long as the transport
/// allows unless [`MailerLiteConfigBuilder::timeout`] is set.
///
/// # Thread Safety
///
/// `MailerLiteConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use mailerlite::{ApiKey, MailerLiteConfig};
///
/// let config = MailerLiteConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://api.mailerlite.com/api/v2");
/// ```
#[derive(Clone, Debug)]
pub struct MailerLiteConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl MailerLiteConfig {
    /// Creates a new builder for constructing a `MailerLiteConfig`.
    #[must_use]
    pub fn builder() -> MailerLiteConfigBuilder {
        MailerLiteConfigBuilder::new()
    }

    /// Builds a configuration from `MAILERLITE_API_KEY` and the optional
    /// `MAILERLITE_BASE_URL` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the API key variable
    /// is unset, or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_ENV)
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let mut builder = Self::builder().api_key(ApiKey::new(api_key)?);
        if let Some(url) = lookup(BASE_URL_ENV) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        builder.build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MailerLiteConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailerLiteConfig>();
};

/// Builder for constructing [`MailerLiteConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`MAILERLITE_API_V2_URL`]
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct MailerLiteConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl MailerLiteConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets a timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MailerLiteConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<MailerLiteConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(MailerLiteConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_builder_requires_api_key() {
        let result = MailerLiteConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_defaults() {
        let config = MailerLiteConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), MAILERLITE_API_V2_URL);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = MailerLiteConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://localhost:3000").unwrap())
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:3000");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_api_key() {
        let config = MailerLiteConfig::builder()
            .api_key(ApiKey::new("very-secret-key").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MailerLiteConfig"));
        assert!(!debug_str.contains("very-secret-key"));
    }

    #[test]
    fn test_from_lookup_reads_key_and_base_url() {
        let env: HashMap<&str, &str> = [
            (API_KEY_ENV, "env-key"),
            (BASE_URL_ENV, "http://127.0.0.1:9000/"),
        ]
        .into_iter()
        .collect();

        let config =
            MailerLiteConfig::from_lookup(|name| env.get(name).map(ToString::to_string)).unwrap();

        assert_eq!(config.api_key().as_ref(), "env-key");
        assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_from_lookup_without_key_fails() {
        let result = MailerLiteConfig::from_lookup(|_| None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }
}
