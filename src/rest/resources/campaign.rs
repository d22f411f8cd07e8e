//! Campaign resource implementation.
//!
//! This module provides the [`Campaigns`] resource: listing campaigns by
//! delivery state, creating regular and A/B campaigns, setting their content,
//! and sending or cancelling them.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::rest::resources::Campaigns;
//! use mailerlite::rest::{CampaignStatus, ListParams, Order};
//! use serde_json::json;
//!
//! let campaigns = Campaigns::new(headers)?;
//!
//! let created = campaigns.create(&json!({
//!     "type": "regular",
//!     "subject": "Monthly news",
//!     "groups": [2984475],
//! }))?;
//! let id = created["id"].as_u64().unwrap();
//!
//! campaigns.update(
//!     id,
//!     "<h1>Hello</h1><a href=\"{$unsubscribe}\">Unsubscribe</a>",
//!     "Hello. Unsubscribe: {$unsubscribe} View online: {$url}",
//!     true,
//! )?;
//! campaigns.send(id)?;
//!
//! let sent = campaigns.all(CampaignStatus::Sent, ListParams::default(), Order::Desc, false)?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{build_url, HttpClient, HttpResponse};
use crate::error::ConfigError;
use crate::rest::{
    CampaignStatus, CampaignType, ListParams, Order, PayloadSchema, Record, ResourceError,
    ResourceResponse, ValidationError,
};

use super::common::{missing_key, required_count, resource_constructors, Stats};

/// Placeholder the API requires in both HTML and plain content.
pub const UNSUBSCRIBE_PLACEHOLDER: &str = "{$unsubscribe}";

/// Placeholder the API requires in plain content.
pub const URL_PLACEHOLDER: &str = "{$url}";

const CREATE_SCHEMA: PayloadSchema = PayloadSchema::new(
    &["type"],
    &[
        "subject",
        "from",
        "from_name",
        "language",
        "groups",
        "segments",
        "ab_settings",
    ],
);

const AB_SETTINGS_SCHEMA: PayloadSchema = PayloadSchema::new(
    &["send_type", "values"],
    &["ab_win_type", "winner_after", "winner_after_type", "split_part"],
);

/// An email campaign.
///
/// # Fields
///
/// - `id` - The campaign identifier
/// - `total_recipients` - Number of subscribers the campaign was sent to
/// - `kind` - `regular` or `ab` (`type` on the wire)
/// - `date_created`, `date_send` - Creation and delivery timestamps
/// - `opened`, `clicked` - Open and click statistics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Campaign {
    /// The identifier.
    pub id: Option<u64>,
    /// Number of subscribers the campaign was sent to.
    pub total_recipients: Option<u64>,
    /// `regular` or `ab`, `type` on the wire.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Creation timestamp.
    pub date_created: Option<String>,
    /// Delivery timestamp.
    pub date_send: Option<String>,
    /// The display name.
    pub name: Option<String>,
    /// Delivery state (`sent`, `draft`, `outbox`).
    pub status: Option<String>,
    /// Open statistics.
    pub opened: Option<Stats>,
    /// Click statistics.
    pub clicked: Option<Stats>,
}

impl Record for Campaign {
    const NAME: &'static str = "Campaign";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "total_recipients",
        "type",
        "date_created",
        "date_send",
        "name",
        "status",
        "opened",
        "clicked",
    ];
}

/// Campaign operations.
#[derive(Debug, Clone)]
pub struct Campaigns {
    client: Arc<HttpClient>,
}

resource_constructors!(Campaigns);

impl Campaigns {
    /// Lists the campaigns in a delivery state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure and
    /// [`ResourceError::Decode`] when a campaign cannot be mapped.
    pub fn all(
        &self,
        status: CampaignStatus,
        params: ListParams,
        order: Order,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Campaign>>, ResourceError> {
        let path = build_url(
            &[&"campaigns", &status],
            &[
                ("limit", &params.limit),
                ("offset", &params.offset),
                ("order", &order),
            ],
        );
        let response = self.client.get(&path)?;
        ResourceResponse::from_http(response, as_json, Campaign::from_json_list)
    }

    /// Returns the number of campaigns, optionally in one delivery state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] when the answer has no `count`.
    pub fn count(&self, status: Option<CampaignStatus>) -> Result<u64, ResourceError> {
        let path = match status {
            Some(status) => build_url(&[&"campaigns", &status, &"count"], &[]),
            None => build_url(&[&"campaigns", &"count"], &[]),
        };
        let body = self.client.get(&path)?.into_body();
        required_count(&body)
    }

    /// Creates a campaign and returns the API answer.
    ///
    /// The payload needs a `type` and either `groups` or `segments`. A
    /// `regular` campaign needs a `subject`; an `ab` campaign needs
    /// `ab_settings` with `send_type` and `values`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] or [`ResourceError::Config`]
    /// before sending when the payload is rejected.
    pub fn create(&self, data: &Value) -> Result<Value, ResourceError> {
        validate_create(data)?;
        let response = self.client.post(&build_url(&[&"campaigns"], &[]), Some(data))?;
        Ok(response.into_body())
    }

    /// Sets the content of a draft campaign and returns the `success` flag.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPlaceholder`] before sending when
    /// `html` lacks `{$unsubscribe}` or `plain` lacks `{$unsubscribe}` or `{$url}`.
    pub fn update(
        &self,
        id: u64,
        html: &str,
        plain: &str,
        auto_inline: bool,
    ) -> Result<bool, ResourceError> {
        check_placeholders(html, plain)?;

        let body = json!({
            "html": html,
            "plain": plain,
            "auto_inline": auto_inline,
        });
        let path = build_url(&[&"campaigns", &id, &"content"], &[]);
        let answer = self.client.put(&path, &body)?.into_body();

        answer
            .get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| missing_key("success"))
    }

    /// Sends a campaign and returns the API answer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn send(&self, id: u64) -> Result<Value, ResourceError> {
        self.action(id, "send")
    }

    /// Cancels a scheduled campaign and returns the API answer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn cancel(&self, id: u64) -> Result<Value, ResourceError> {
        self.action(id, "cancel")
    }

    /// Removes a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn delete(&self, id: u64) -> Result<HttpResponse, ResourceError> {
        Ok(self.client.delete(&build_url(&[&"campaigns", &id], &[]))?)
    }

    fn action(&self, id: u64, action: &str) -> Result<Value, ResourceError> {
        let path = build_url(&[&"campaigns", &id, &"actions", &action], &[]);
        Ok(self.client.post(&path, None)?.into_body())
    }
}

fn validate_create(data: &Value) -> Result<(), ResourceError> {
    let map = CREATE_SCHEMA.validate(data)?;

    let raw_type = &map["type"];
    let campaign_type: CampaignType = raw_type
        .as_str()
        .ok_or_else(|| ConfigError::InvalidCampaignType {
            value: raw_type.to_string(),
        })?
        .parse()?;

    if !map.contains_key("groups") && !map.contains_key("segments") {
        return Err(ValidationError::MissingKeys {
            keys: vec!["groups".to_string(), "segments".to_string()],
        }
        .into());
    }

    match campaign_type {
        CampaignType::Regular => {
            if !map.contains_key("subject") {
                return Err(ValidationError::MissingKeys {
                    keys: vec!["subject".to_string()],
                }
                .into());
            }
        }
        CampaignType::Ab => {
            let settings = map.get("ab_settings").ok_or_else(|| ValidationError::MissingKeys {
                keys: vec!["ab_settings".to_string()],
            })?;
            AB_SETTINGS_SCHEMA.validate(settings)?;
        }
    }

    Ok(())
}

fn check_placeholders(html: &str, plain: &str) -> Result<(), ValidationError> {
    if !html.contains(UNSUBSCRIBE_PLACEHOLDER) {
        return Err(ValidationError::MissingPlaceholder {
            content: "html",
            placeholder: UNSUBSCRIBE_PLACEHOLDER,
        });
    }
    for placeholder in [UNSUBSCRIBE_PLACEHOLDER, URL_PLACEHOLDER] {
        if !plain.contains(placeholder) {
            return Err(ValidationError::MissingPlaceholder {
                content: "plain",
                placeholder,
            });
        }
    }
    Ok(())
}
