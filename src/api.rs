//! Entry point bundling every resource module over one client.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::{BatchEntry, BatchRequest, HttpMethod, MailerLiteApi};
//! use mailerlite::rest::ListParams;
//! use serde_json::json;
//!
//! let api = MailerLiteApi::new("my-api-key")?;
//!
//! let groups = api.groups().all(ListParams::default(), None, false)?;
//! let count = api.subscribers().count()?;
//!
//! let batch = BatchRequest::new()
//!     .with(BatchEntry::new(HttpMethod::Get, "/api/v2/groups"))
//!     .with(BatchEntry::new(HttpMethod::Post, "/api/v2/groups").body(json!({"name": "New"})));
//! let results = api.batch(&batch)?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{build_url, Headers, HttpClient, HttpMethod};
use crate::config::{ApiKey, MailerLiteConfig};
use crate::rest::resources::{Account, Campaigns, Fields, Groups, Segments, Subscribers, Webhooks};
use crate::rest::ResourceError;

/// One request inside a [`BatchRequest`].
///
/// `path` is the full API path, e.g. `/api/v2/groups`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The request path.
    pub path: String,
    /// The optional JSON body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl BatchEntry {
    /// Creates an entry without a body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Sets the body of the entry.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A list of requests executed by the batch endpoint.
///
/// The API documents a limit of 50 entries; it is enforced remotely.
///
/// # Example
///
/// ```rust
/// use mailerlite::{BatchEntry, BatchRequest, HttpMethod};
/// use serde_json::json;
///
/// let batch = BatchRequest::new()
///     .with(BatchEntry::new(HttpMethod::Get, "/api/v2/groups"));
///
/// assert_eq!(
///     serde_json::to_value(&batch).unwrap(),
///     json!({"requests": [{"method": "GET", "path": "/api/v2/groups"}]})
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// The requests, in execution order.
    pub requests: Vec<BatchEntry>,
}

impl BatchRequest {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    #[must_use]
    pub fn with(mut self, entry: BatchEntry) -> Self {
        self.requests.push(entry);
        self
    }

    /// Appends an entry in place.
    pub fn push(&mut self, entry: BatchEntry) {
        self.requests.push(entry);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns `true` if the batch holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// The MailerLite API, one value per account.
///
/// All resource modules share a single [`HttpClient`] and therefore the same
/// credentials.
///
/// # Thread Safety
///
/// `MailerLiteApi` is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct MailerLiteApi {
    client: Arc<HttpClient>,
    account: Account,
    campaigns: Campaigns,
    subscribers: Subscribers,
    groups: Groups,
    fields: Fields,
    segments: Segments,
    webhooks: Webhooks,
}

// Verify MailerLiteApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailerLiteApi>();
};

impl MailerLiteApi {
    /// Creates the API for an account key with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] with
    /// [`ConfigError::EmptyApiKey`](crate::ConfigError::EmptyApiKey) for an
    /// empty key, or [`ResourceError::Http`] if the transport cannot be
    /// initialized.
    pub fn new(api_key: &str) -> Result<Self, ResourceError> {
        let config = MailerLiteConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Self::with_config(&config)
    }

    /// Creates the API from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the transport cannot be initialized.
    pub fn with_config(config: &MailerLiteConfig) -> Result<Self, ResourceError> {
        let client = Arc::new(HttpClient::from_config(config)?);
        tracing::debug!(base_url = client.base_url(), "MailerLite API client ready");

        Ok(Self {
            account: Account::from_client(Arc::clone(&client)),
            campaigns: Campaigns::from_client(Arc::clone(&client)),
            subscribers: Subscribers::from_client(Arc::clone(&client)),
            groups: Groups::from_client(Arc::clone(&client)),
            fields: Fields::from_client(Arc::clone(&client)),
            segments: Segments::from_client(Arc::clone(&client)),
            webhooks: Webhooks::from_client(Arc::clone(&client)),
            client,
        })
    }

    /// Returns the credential headers sent with every request.
    #[must_use]
    pub fn headers(&self) -> &Headers {
        self.client.headers()
    }

    /// Returns the shared client.
    #[must_use]
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    #[must_use]
    pub const fn account(&self) -> &Account {
        &self.account
    }

    #[must_use]
    pub const fn campaigns(&self) -> &Campaigns {
        &self.campaigns
    }

    #[must_use]
    pub const fn subscribers(&self) -> &Subscribers {
        &self.subscribers
    }

    #[must_use]
    pub const fn groups(&self) -> &Groups {
        &self.groups
    }

    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    #[must_use]
    pub const fn segments(&self) -> &Segments {
        &self.segments
    }

    #[must_use]
    pub const fn webhooks(&self) -> &Webhooks {
        &self.webhooks
    }

    /// Runs several requests in one call and returns their results in
    /// submission order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure and
    /// [`ResourceError::Decode`] when the answer is not a list.
    pub fn batch(&self, request: &BatchRequest) -> Result<Vec<Value>, ResourceError> {
        tracing::debug!(entries = request.len(), "sending MailerLite batch");

        let body = serde_json::to_value(request)?;
        let answer = self
            .client
            .post(&build_url(&[&"batch"], &[]), Some(&body))?
            .into_body();

        match answer {
            Value::Null => Ok(Vec::new()),
            Value::Array(results) => Ok(results),
            other => Ok(serde_json::from_value(other)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use serde_json::json;

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(matches!(
            MailerLiteApi::new(""),
            Err(ResourceError::Config(ConfigError::EmptyApiKey))
        ));
    }

    #[test]
    fn test_new_builds_canonical_headers() {
        let api = MailerLiteApi::new("my-key").unwrap();
        assert_eq!(api.headers().api_key(), "my-key");
        assert_eq!(api.headers().get("content-type"), Some("application/json"));
    }

    #[test]
    fn test_resources_share_one_client() {
        let api = MailerLiteApi::new("my-key").unwrap();
        assert!(std::ptr::eq(api.groups().client(), api.client()));
        assert!(std::ptr::eq(api.webhooks().client(), api.subscribers().client()));
    }

    #[test]
    fn test_batch_request_serialization() {
        let batch = BatchRequest::new()
            .with(BatchEntry::new(HttpMethod::Get, "/api/v2/groups"))
            .with(BatchEntry::new(HttpMethod::Post, "/api/v2/groups").body(json!({"name": "New"})));

        assert_eq!(batch.len(), 2);
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            json!({
                "requests": [
                    {"method": "GET", "path": "/api/v2/groups"},
                    {"method": "POST", "path": "/api/v2/groups", "body": {"name": "New"}}
                ]
            })
        );
    }

    #[test]
    fn test_batch_cap_is_not_enforced_locally() {
        let mut batch = BatchRequest::new();
        for i in 0..60 {
            batch.push(BatchEntry::new(HttpMethod::Get, format!("/api/v2/groups/{i}")));
        }
        assert_eq!(batch.len(), 60);
        assert!(!batch.is_empty());
    }
}
