//! Group resource implementation.
//!
//! Groups are named subscriber lists. Besides the group CRUD calls, this
//! module manages group membership: adding one subscriber, importing many,
//! and listing or removing members.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::rest::resources::{AddSubscriberOptions, Groups};
//! use mailerlite::rest::ListParams;
//! use serde_json::json;
//!
//! let groups = Groups::new(headers)?;
//! let group = groups.create("Newsletter", false)?.into_record().unwrap();
//! let group_id = group.id.unwrap();
//!
//! groups.add_subscriber(
//!     group_id,
//!     &json!({"email": "demo@mailerlite.com", "name": "Demo"}),
//!     AddSubscriberOptions::default(),
//!     false,
//! )?;
//!
//! let members = groups.subscribers(group_id, ListParams::default(), None, false)?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{build_url, HttpClient, HttpResponse};
use crate::rest::{
    ListParams, PayloadSchema, Record, ResourceError, ResourceResponse, SubscriberType,
};

use super::common::{resource_constructors, take_key};
use super::subscriber::{Subscriber, SubscriberId};

const SUBSCRIBER_SCHEMA: PayloadSchema = PayloadSchema::new(&["email"], &["name", "fields", "type"]);

/// A subscriber group and its delivery totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Group {
    /// The identifier.
    pub id: Option<u64>,
    /// The display name.
    pub name: Option<String>,
    /// Number of members in any state.
    pub total: Option<u64>,
    /// Number of active members.
    pub active: Option<u64>,
    /// Number of unsubscribed members.
    pub unsubscribed: Option<u64>,
    /// Number of bounced members.
    pub bounced: Option<u64>,
    /// Number of unconfirmed members.
    pub unconfirmed: Option<u64>,
    /// Number of members marked as junk.
    pub junk: Option<u64>,
    /// Number of emails sent to the group.
    pub sent: Option<u64>,
    /// Number of opens in the group.
    pub opened: Option<u64>,
    /// Number of clicks in the group.
    pub clicked: Option<u64>,
    /// Creation timestamp.
    pub date_created: Option<String>,
    /// Last update timestamp.
    pub date_updated: Option<String>,
}

impl Record for Group {
    const NAME: &'static str = "Group";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "total",
        "active",
        "unsubscribed",
        "bounced",
        "unconfirmed",
        "junk",
        "sent",
        "opened",
        "clicked",
        "date_created",
        "date_updated",
    ];
}

/// Flags sent with subscribers added to a group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddSubscriberOptions {
    /// Reactivate subscribers who had unsubscribed.
    pub resubscribe: bool,
    /// Trigger the group's autoresponders.
    pub autoresponders: bool,
}

/// Group operations.
#[derive(Debug, Clone)]
pub struct Groups {
    client: Arc<HttpClient>,
}

resource_constructors!(Groups);

impl Groups {
    /// Lists groups, optionally narrowed by a filter expression.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure and
    /// [`ResourceError::Decode`] when a group cannot be mapped.
    pub fn all(
        &self,
        params: ListParams,
        filters: Option<&str>,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Group>>, ResourceError> {
        let path = match filters {
            Some(filters) => build_url(
                &[&"groups"],
                &[
                    ("limit", &params.limit),
                    ("offset", &params.offset),
                    ("filters", &filters),
                ],
            ),
            None => build_url(
                &[&"groups"],
                &[("limit", &params.limit), ("offset", &params.offset)],
            ),
        };
        let response = self.client.get(&path)?;
        ResourceResponse::from_http(response, as_json, Group::from_json_list)
    }

    /// Fetches one group.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all). A missing group has status 404.
    pub fn get(&self, id: u64, as_json: bool) -> Result<ResourceResponse<Group>, ResourceError> {
        let response = self.client.get(&build_url(&[&"groups", &id], &[]))?;
        ResourceResponse::from_http(response, as_json, Group::from_json)
    }

    /// Creates a group.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn create(&self, name: &str, as_json: bool) -> Result<ResourceResponse<Group>, ResourceError> {
        let body = json!({ "name": name });
        let response = self.client.post(&build_url(&[&"groups"], &[]), Some(&body))?;
        ResourceResponse::from_http(response, as_json, Group::from_json)
    }

    /// Renames a group.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn update(
        &self,
        id: u64,
        name: &str,
        as_json: bool,
    ) -> Result<ResourceResponse<Group>, ResourceError> {
        let body = json!({ "name": name });
        let response = self.client.put(&build_url(&[&"groups", &id], &[]), &body)?;
        ResourceResponse::from_http(response, as_json, Group::from_json)
    }

    /// Removes a group.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn delete(&self, id: u64) -> Result<HttpResponse, ResourceError> {
        Ok(self.client.delete(&build_url(&[&"groups", &id], &[]))?)
    }

    /// Adds one subscriber to a group.
    ///
    /// The subscriber needs `email` and may hold `name`, `fields` and `type`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] before sending when the
    /// subscriber is rejected.
    pub fn add_subscriber(
        &self,
        group_id: u64,
        subscriber: &Value,
        options: AddSubscriberOptions,
        as_json: bool,
    ) -> Result<ResourceResponse<Subscriber>, ResourceError> {
        let mut body = SUBSCRIBER_SCHEMA.validate(subscriber)?.clone();
        body.insert("resubscribe".to_string(), Value::Bool(options.resubscribe));
        body.insert("autoresponders".to_string(), Value::Bool(options.autoresponders));

        let path = build_url(&[&"groups", &group_id, &"subscribers"], &[]);
        let response = self.client.post(&path, Some(&Value::Object(body)))?;
        ResourceResponse::from_http(response, as_json, Subscriber::from_json)
    }

    /// Imports many subscribers into a group and returns the imported ones.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] before sending when any entry
    /// is rejected.
    pub fn import_subscribers(
        &self,
        group_id: u64,
        subscribers: &[Value],
        options: AddSubscriberOptions,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        for subscriber in subscribers {
            SUBSCRIBER_SCHEMA.validate(subscriber)?;
        }

        let body = json!({
            "subscribers": subscribers,
            "resubscribe": options.resubscribe,
            "autoresponders": options.autoresponders,
        });
        let path = build_url(&[&"groups", &group_id, &"subscribers", &"import"], &[]);
        let response = self.client.post(&path, Some(&body))?;
        ResourceResponse::from_http(response, as_json, |body| {
            if body.get("imported").is_none() {
                tracing::warn!(group_id, "import answer has no 'imported' list");
            }
            Subscriber::from_json_list(take_key(body, "imported"))
        })
    }

    /// Lists the members of a group, optionally in one subscription state.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn subscribers(
        &self,
        group_id: u64,
        params: ListParams,
        stype: Option<SubscriberType>,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        let segments: &[&dyn std::fmt::Display] = &[&"groups", &group_id, &"subscribers"];
        let path = match stype {
            Some(stype) => build_url(
                segments,
                &[
                    ("limit", &params.limit),
                    ("offset", &params.offset),
                    ("type", &stype),
                ],
            ),
            None => build_url(
                segments,
                &[("limit", &params.limit), ("offset", &params.offset)],
            ),
        };
        let response = self.client.get(&path)?;
        ResourceResponse::from_http(response, as_json, Subscriber::from_json_list)
    }

    /// Fetches one member of a group.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn subscriber(
        &self,
        group_id: u64,
        subscriber_id: &SubscriberId,
        as_json: bool,
    ) -> Result<ResourceResponse<Subscriber>, ResourceError> {
        let path = build_url(&[&"groups", &group_id, &"subscribers", subscriber_id], &[]);
        let response = self.client.get(&path)?;
        ResourceResponse::from_http(response, as_json, Subscriber::from_json)
    }

    /// Removes a subscriber from a group.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn delete_subscriber(
        &self,
        group_id: u64,
        subscriber_id: &SubscriberId,
    ) -> Result<HttpResponse, ResourceError> {
        let path = build_url(&[&"groups", &group_id, &"subscribers", subscriber_id], &[]);
        Ok(self.client.delete(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::record::assert_fields_match;
    use crate::rest::ValidationError;

    #[test]
    fn test_fields_match_serialized_keys() {
        assert_fields_match::<Group>();
    }

    #[test]
    fn test_group_from_json() {
        let group = Group::from_json(json!({
            "id": 2984475,
            "name": "Newsletter",
            "total": 12,
            "active": 10,
            "unsubscribed": 1,
            "bounced": 1,
            "unconfirmed": 0,
            "junk": 0,
            "sent": 4,
            "opened": 3,
            "clicked": 1,
            "date_created": "2016-04-04 12:00:00",
            "date_updated": "2016-04-04 12:00:00"
        }))
        .unwrap();
        assert_eq!(group.id, Some(2_984_475));
        assert_eq!(group.total, Some(12));
    }

    #[test]
    fn test_subscriber_schema() {
        assert!(SUBSCRIBER_SCHEMA
            .validate(&json!({"email": "a@b.c", "name": "A", "type": "active"}))
            .is_ok());
        assert!(matches!(
            SUBSCRIBER_SCHEMA.validate(&json!({"name": "A"})),
            Err(ValidationError::MissingKeys { .. })
        ));
        assert!(matches!(
            SUBSCRIBER_SCHEMA.validate(&json!({"email": "a@b.c", "resubscribe": true})),
            Err(ValidationError::UnknownKeys { .. })
        ));
    }

    #[test]
    fn test_add_subscriber_options_default_to_false() {
        let options = AddSubscriberOptions::default();
        assert!(!options.resubscribe);
        assert!(!options.autoresponders);
    }
}
