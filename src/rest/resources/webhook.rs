//! Webhook resource implementation.
//!
//! Webhooks notify an external URL when an account event (for example
//! `subscriber.create`) occurs.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::rest::resources::Webhooks;
//!
//! let webhooks = Webhooks::new(headers)?;
//! webhooks.create("https://example.com/hook", "subscriber.create", false)?;
//! println!("{} webhooks", webhooks.count()?);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{build_url, HttpClient, HttpResponse};
use crate::rest::{Record, ResourceError, ResourceResponse};

use super::common::{count_of, resource_constructors, take_key};

/// A webhook subscription.
///
/// # Fields
///
/// - `id` - The webhook identifier
/// - `event` - The event that triggers the webhook
/// - `url` - Where the notification is posted
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Webhook {
    /// The identifier.
    pub id: Option<u64>,
    /// The event that triggers the webhook.
    pub event: Option<String>,
    /// Where the notification is posted.
    pub url: Option<String>,
    /// Creation timestamp.
    pub date_created: Option<String>,
    /// Last update timestamp.
    pub date_updated: Option<String>,
}

impl Record for Webhook {
    const NAME: &'static str = "Webhook";
    const FIELDS: &'static [&'static str] = &["id", "event", "url", "date_created", "date_updated"];
}

/// Webhook operations.
#[derive(Debug, Clone)]
pub struct Webhooks {
    client: Arc<HttpClient>,
}

resource_constructors!(Webhooks);

impl Webhooks {
    /// Lists all webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure and
    /// [`ResourceError::Decode`] when a webhook cannot be mapped.
    pub fn all(&self, as_json: bool) -> Result<ResourceResponse<Vec<Webhook>>, ResourceError> {
        let response = self.client.get(&build_url(&[&"webhooks"], &[]))?;
        ResourceResponse::from_http(response, as_json, |body| {
            Webhook::from_json_list(take_key(body, "webhooks"))
        })
    }

    /// Fetches one webhook.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all). A missing webhook has status 404.
    pub fn get(&self, id: u64, as_json: bool) -> Result<ResourceResponse<Webhook>, ResourceError> {
        let response = self.client.get(&build_url(&[&"webhooks", &id], &[]))?;
        ResourceResponse::from_http(response, as_json, Webhook::from_json)
    }

    /// Registers a webhook for `event`.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn create(
        &self,
        url: &str,
        event: &str,
        as_json: bool,
    ) -> Result<ResourceResponse<Webhook>, ResourceError> {
        let body = json!({ "url": url, "event": event });
        let response = self.client.post(&build_url(&[&"webhooks"], &[]), Some(&body))?;
        ResourceResponse::from_http(response, as_json, Webhook::from_json)
    }

    /// Changes the URL and event of a webhook.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn update(
        &self,
        id: u64,
        url: &str,
        event: &str,
        as_json: bool,
    ) -> Result<ResourceResponse<Webhook>, ResourceError> {
        let body = json!({ "url": url, "event": event });
        let response = self.client.put(&build_url(&[&"webhooks", &id], &[]), &body)?;
        ResourceResponse::from_http(response, as_json, Webhook::from_json)
    }

    /// Removes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn delete(&self, id: u64) -> Result<HttpResponse, ResourceError> {
        Ok(self.client.delete(&build_url(&[&"webhooks", &id], &[]))?)
    }

    /// Returns the number of webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn count(&self) -> Result<u64, ResourceError> {
        let body = self.client.get(&build_url(&[&"webhooks"], &[]))?.into_body();
        Ok(webhook_count(&body))
    }
}

fn webhook_count(body: &Value) -> u64 {
    if let Some(count) = count_of(body) {
        return count;
    }
    let list = body.get("webhooks").unwrap_or(body);
    list.as_array().map_or(0, |items| items.len() as u64)
}
