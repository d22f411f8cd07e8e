//! Blocking HTTP client for MailerLite API communication.
//!
//! This module provides the [`HttpClient`] type, the single choke point
//! every resource module funnels its requests through.

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::headers::Headers;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, MailerLiteConfig};

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Blocking HTTP client for the MailerLite API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - The credential headers plus `User-Agent` and `Accept`
/// - Status code interpretation (`204` as no content, `>= 400` as an error)
///
/// Each call performs exactly one HTTP exchange; nothing is retried and no
/// timeout applies unless one was configured.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and immutable after construction.
///
/// # Example
///
/// ```rust,no_run
/// use mailerlite::clients::{Headers, HttpClient, HttpMethod};
/// use mailerlite::ApiKey;
///
/// let headers = Headers::from_api_key(&ApiKey::new("my-key").unwrap());
/// let client = HttpClient::new(headers, None).unwrap();
///
/// let response = client.request(HttpMethod::Get, "groups", None).unwrap();
/// println!("{:?}", response.body());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    base_url: BaseUrl,
    headers: Headers,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new client sending the given headers with every request.
    ///
    /// The optional configuration supplies the base URL, timeout and
    /// user agent prefix. Its API key is not used: credentials always come
    /// from `headers`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying transport cannot be
    /// initialized (e.g., TLS backend failure).
    pub fn new(headers: Headers, config: Option<&MailerLiteConfig>) -> Result<Self, HttpError> {
        let base_url = config
            .map(|config| config.base_url().clone())
            .unwrap_or_default();

        let user_agent_prefix = config
            .and_then(MailerLiteConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}MailerLite Rust Client v{SDK_VERSION}");

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .timeout(config.and_then(MailerLiteConfig::timeout))
            .build()?;

        Ok(Self {
            client,
            base_url,
            headers,
            user_agent,
        })
    }

    /// Creates a client from a configuration, deriving the headers from its API key.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be initialized.
    pub fn from_config(config: &MailerLiteConfig) -> Result<Self, HttpError> {
        Self::new(Headers::from_api_key(config.api_key()), Some(config))
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    /// Returns the credential headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the absolute URL for a base-relative path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends one request to the MailerLite API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the transport fails (`Network`)
    /// - the status code is 400 or more (`Response`)
    /// - a 2xx body is not valid JSON (`Decode`)
    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(path);
        tracing::debug!(%method, path, "sending MailerLite request");

        let mut req_builder = self
            .client
            .request(method.as_reqwest(), &url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        for (key, value) in self.headers.iter() {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send()?;
        let code = res.status().as_u16();
        let body_text = res.text()?;

        if code >= 400 {
            tracing::warn!(%method, path, code, "MailerLite request failed");
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: body_text,
            }));
        }

        if code == 204 {
            return Ok(HttpResponse::NoContent);
        }

        let body = if body_text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body_text)?
        };

        Ok(HttpResponse::Json { code, body })
    }

    /// Sends one request with a method given by name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] before any I/O when `method` is
    /// not GET, POST, PUT, PATCH or DELETE; otherwise as [`request`](Self::request).
    pub fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, HttpError> {
        let method: HttpMethod = method.parse()?;
        self.request(method, path, body)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Get, path, None)
    }

    /// Sends a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn post(&self, path: &str, body: Option<&Value>) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Post, path, body)
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn put(&self, path: &str, body: &Value) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Put, path, Some(body))
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn patch(&self, path: &str, body: &Value) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Patch, path, Some(body))
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Delete, path, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, MAILERLITE_API_V2_URL};
    use std::time::Duration;

    fn create_test_client() -> HttpClient {
        let headers = Headers::from_api_key(&ApiKey::new("test-key").unwrap());
        HttpClient::new(headers, None).unwrap()
    }

    #[test]
    fn test_client_uses_default_base_url() {
        let client = create_test_client();
        assert_eq!(client.base_url(), MAILERLITE_API_V2_URL);
    }

    #[test]
    fn test_url_for_joins_paths() {
        let client = create_test_client();
        assert_eq!(
            client.url_for("groups/1"),
            "https://api.mailerlite.com/api/v2/groups/1"
        );
        assert_eq!(
            client.url_for("/groups"),
            "https://api.mailerlite.com/api/v2/groups"
        );
    }

    #[test]
    fn test_user_agent_format() {
        let client = create_test_client();
        assert!(client.user_agent().starts_with("MailerLite Rust Client v"));
    }

    #[test]
    fn test_user_agent_with_prefix_and_config_base_url() {
        let config = MailerLiteConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://localhost:1234").unwrap())
            .timeout(Duration::from_secs(3))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::from_config(&config).unwrap();
        assert!(client.user_agent().starts_with("MyApp/1.0 | "));
        assert_eq!(client.base_url(), "http://localhost:1234");
        assert_eq!(client.headers().api_key(), "key");
    }

    #[test]
    fn test_request_raw_rejects_invalid_method_without_io() {
        // Port 9 (discard) on localhost would fail at the transport level; the
        // method check must fire first.
        let config = MailerLiteConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:9").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::from_config(&config).unwrap();

        let result = client.request_raw("TRACE", "groups", None);
        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }
}
