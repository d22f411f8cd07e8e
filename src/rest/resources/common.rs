//! Records embedded in more than one resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{Record, ResourceError};

/// Open or click statistics of a campaign.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Number of events.
    pub count: Option<u64>,
    /// Share of recipients, between 0 and 1.
    pub rate: Option<f64>,
}

impl Record for Stats {
    const NAME: &'static str = "Stats";
    const FIELDS: &'static [&'static str] = &["count", "rate"];
}

/// A custom field value attached to a subscriber.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubscriberField {
    /// The field key.
    pub key: Option<String>,
    /// The stored value, whose JSON type depends on the field type.
    pub value: Option<Value>,
    /// The field type (`TEXT`, `NUMBER`, `DATE`).
    #[serde(rename = "type")]
    pub field_type: Option<String>,
}

impl Record for SubscriberField {
    const NAME: &'static str = "SubscriberField";
    const FIELDS: &'static [&'static str] = &["key", "value", "type"];
}

/// Pagination block of a paged listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of items.
    pub total: Option<u64>,
    /// Number of items on this page.
    pub count: Option<u64>,
    /// Page size.
    pub per_page: Option<u64>,
    /// Index of this page, starting at 1.
    pub current_page: Option<u64>,
    /// Number of pages.
    pub total_pages: Option<u64>,
    /// Links to neighbouring pages, as returned by the API.
    pub links: Option<Value>,
}

impl Record for Pagination {
    const NAME: &'static str = "Pagination";
    const FIELDS: &'static [&'static str] = &[
        "total",
        "count",
        "per_page",
        "current_page",
        "total_pages",
        "links",
    ];
}

/// Metadata of a paged listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meta {
    /// The pagination block.
    pub pagination: Option<Pagination>,
}

impl Record for Meta {
    const NAME: &'static str = "Meta";
    const FIELDS: &'static [&'static str] = &["pagination"];
}

/// Implements the constructors shared by every resource module.
macro_rules! resource_constructors {
    ($name:ident) => {
        impl $name {
            /// Creates the resource with its own client sending `headers`.
            ///
            /// # Errors
            ///
            /// Returns [`ResourceError::Http`](crate::rest::ResourceError::Http)
            /// if the transport cannot be initialized.
            pub fn new(
                headers: crate::clients::Headers,
            ) -> Result<Self, crate::rest::ResourceError> {
                let client = crate::clients::HttpClient::new(headers, None)?;
                Ok(Self::from_client(std::sync::Arc::new(client)))
            }

            /// Creates the resource with its own client, configured by `config`.
            ///
            /// # Errors
            ///
            /// Returns [`ResourceError::Http`](crate::rest::ResourceError::Http)
            /// if the transport cannot be initialized.
            pub fn with_config(
                headers: crate::clients::Headers,
                config: &crate::config::MailerLiteConfig,
            ) -> Result<Self, crate::rest::ResourceError> {
                let client = crate::clients::HttpClient::new(headers, Some(config))?;
                Ok(Self::from_client(std::sync::Arc::new(client)))
            }

            /// Creates the resource on a shared client.
            #[must_use]
            pub const fn from_client(client: std::sync::Arc<crate::clients::HttpClient>) -> Self {
                Self { client }
            }

            /// Returns the underlying client.
            #[must_use]
            pub fn client(&self) -> &crate::clients::HttpClient {
                &self.client
            }
        }
    };
}

pub(crate) use resource_constructors;

/// Reads an unsigned `count` key from a body.
pub(crate) fn count_of(body: &Value) -> Option<u64> {
    body.get("count").and_then(Value::as_u64)
}

/// Reads the `count` key, failing with a decode error when it is absent.
pub(crate) fn required_count(body: &Value) -> Result<u64, ResourceError> {
    count_of(body).ok_or_else(|| missing_key("count"))
}

/// Builds the decode error of a response lacking `key`.
pub(crate) fn missing_key(key: &'static str) -> ResourceError {
    ResourceError::Decode(<serde_json::Error as serde::de::Error>::missing_field(key))
}

/// Takes the value under `key`, or the whole body when the key is absent.
pub(crate) fn take_key(mut body: Value, key: &str) -> Value {
    match body.as_object_mut().and_then(|map| map.remove(key)) {
        Some(inner) => inner,
        None => body,
    }
}
