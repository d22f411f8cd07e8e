//! Subscriber resource implementation.
//!
//! Subscribers are addressed either by their numeric ID or by their email
//! address, both expressed by [`SubscriberId`].
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::rest::resources::{SubscriberId, Subscribers};
//! use serde_json::json;
//!
//! let subscribers = Subscribers::new(headers)?;
//!
//! let created = subscribers
//!     .create(&json!({"email": "demo@mailerlite.com", "name": "Demo"}), false)?
//!     .into_record()
//!     .unwrap();
//!
//! let by_email = subscribers.get(&SubscriberId::from("demo@mailerlite.com"), false)?;
//! let by_id = subscribers.get(&SubscriberId::Id(created.id.unwrap()), false)?;
//!
//! subscribers.update(&SubscriberId::Id(created.id.unwrap()), &json!({"name": "Jack"}), false)?;
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{build_url, HttpClient, HttpResponse};
use crate::rest::{
    as_object, ActivityType, ListParams, PayloadSchema, Record, ResourceError, ResourceResponse,
    SubscriberType, ValidationError,
};

use super::common::{required_count, resource_constructors, SubscriberField};
use super::group::Group;

const CREATE_SCHEMA: PayloadSchema = PayloadSchema::new(
    &["email"],
    &[
        "name",
        "fields",
        "resubscribe",
        "type",
        "signup_ip",
        "signup_timestamp",
        "confirmation_ip",
        "confirmation_timestamp",
    ],
);

const UPDATE_SCHEMA: PayloadSchema =
    PayloadSchema::new(&[], &["name", "fields", "resubscribe", "type"]);

/// Identifies a subscriber by ID or by email address.
///
/// Displayed as the raw path segment.
///
/// # Example
///
/// ```rust
/// use mailerlite::rest::resources::SubscriberId;
///
/// let id = SubscriberId::resolve(Some(42), Some("demo@mailerlite.com")).unwrap();
/// assert_eq!(id, SubscriberId::Id(42));
/// assert_eq!(id.to_string(), "42");
///
/// let email = SubscriberId::resolve(None, Some("demo@mailerlite.com")).unwrap();
/// assert_eq!(email.to_string(), "demo@mailerlite.com");
///
/// assert!(SubscriberId::resolve(None, None).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SubscriberId {
    /// The numeric subscriber ID.
    Id(u64),
    /// The subscriber's email address.
    Email(String),
}

impl SubscriberId {
    /// Picks the identifier out of an optional ID and email, preferring the ID.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingIdentifier`] when both are absent.
    pub fn resolve(id: Option<u64>, email: Option<&str>) -> Result<Self, ValidationError> {
        match (id, email) {
            (Some(id), _) => Ok(Self::Id(id)),
            (None, Some(email)) => Ok(Self::Email(email.to_string())),
            (None, None) => Err(ValidationError::MissingIdentifier),
        }
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Email(email) => f.write_str(email),
        }
    }
}

impl From<u64> for SubscriberId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for SubscriberId {
    fn from(email: &str) -> Self {
        Self::Email(email.to_string())
    }
}

impl From<String> for SubscriberId {
    fn from(email: String) -> Self {
        Self::Email(email)
    }
}

/// A subscriber of the account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subscriber {
    /// The subscriber identifier.
    pub id: Option<u64>,
    /// The display name.
    pub name: Option<String>,
    /// The email address. It cannot be changed once the subscriber exists.
    pub email: Option<String>,
    /// Number of campaigns sent to the subscriber.
    pub sent: Option<u64>,
    /// Number of campaigns opened.
    pub opened: Option<u64>,
    /// Number of campaigns clicked.
    pub clicked: Option<u64>,
    /// Subscription state (`active`, `unsubscribed`, ...), `type` on the wire.
    #[serde(rename = "type")]
    pub subscriber_type: Option<String>,
    /// IP address the subscriber signed up from.
    pub signup_ip: Option<String>,
    /// Sign-up timestamp.
    pub signup_timestamp: Option<String>,
    /// IP address the subscription was confirmed from.
    pub confirmation_ip: Option<String>,
    /// Confirmation timestamp.
    pub confirmation_timestamp: Option<String>,
    /// Custom field values.
    pub fields: Option<Vec<SubscriberField>>,
    /// Subscription timestamp.
    pub date_subscribe: Option<String>,
    /// Unsubscription timestamp.
    pub date_unsubscribe: Option<String>,
    /// Creation timestamp.
    pub date_created: Option<String>,
    /// Last update timestamp.
    pub date_updated: Option<String>,
    /// Share of campaigns opened, between 0 and 1.
    pub opened_rate: Option<f64>,
    /// Share of campaigns clicked, between 0 and 1.
    pub clicked_rate: Option<f64>,
    /// The country, as returned by the API.
    pub country_id: Option<Value>,
}

impl Record for Subscriber {
    const NAME: &'static str = "Subscriber";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "email",
        "sent",
        "opened",
        "clicked",
        "type",
        "signup_ip",
        "signup_timestamp",
        "confirmation_ip",
        "confirmation_timestamp",
        "fields",
        "date_subscribe",
        "date_unsubscribe",
        "date_created",
        "date_updated",
        "opened_rate",
        "clicked_rate",
        "country_id",
    ];
}

/// One event in a subscriber's activity log.
///
/// Sender and receiver details come as flat dotted keys
/// (`receiver.name`, `sender.email`, ...) next to the nested objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Activity {
    /// When the activity happened.
    pub date: Option<String>,
    /// The campaign report the activity belongs to.
    pub report_id: Option<u64>,
    /// Subject of the email involved.
    pub subject: Option<String>,
    /// Activity kind, `type` on the wire.
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// The clicked link identifier.
    pub link_id: Option<Value>,
    /// The clicked URL.
    pub link: Option<String>,
    /// The receiver object, as returned by the API.
    pub receiver: Option<Value>,
    /// Receiver name (`receiver.name`).
    #[serde(rename = "receiver.name")]
    pub receiver_name: Option<String>,
    /// Receiver address (`receiver.email`).
    #[serde(rename = "receiver.email")]
    pub receiver_email: Option<String>,
    /// The sender object, as returned by the API.
    pub sender: Option<Value>,
    /// Sender name (`sender.name`).
    #[serde(rename = "sender.name")]
    pub sender_name: Option<String>,
    /// Sender address (`sender.email`).
    #[serde(rename = "sender.email")]
    pub sender_email: Option<String>,
}

impl Record for Activity {
    const NAME: &'static str = "Activity";
    const FIELDS: &'static [&'static str] = &[
        "date",
        "report_id",
        "subject",
        "type",
        "link_id",
        "link",
        "receiver",
        "receiver.name",
        "receiver.email",
        "sender",
        "sender.name",
        "sender.email",
    ];
}

/// Subscriber operations.
#[derive(Debug, Clone)]
pub struct Subscribers {
    client: Arc<HttpClient>,
}

resource_constructors!(Subscribers);

impl Subscribers {
    /// Lists subscribers, optionally only those in one subscription state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure and
    /// [`ResourceError::Decode`] when a subscriber cannot be mapped.
    pub fn all(
        &self,
        params: ListParams,
        stype: Option<SubscriberType>,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        let path = match stype {
            Some(stype) => build_url(
                &[&"subscribers"],
                &[
                    ("limit", &params.limit),
                    ("offset", &params.offset),
                    ("type", &stype),
                ],
            ),
            None => build_url(
                &[&"subscribers"],
                &[("limit", &params.limit), ("offset", &params.offset)],
            ),
        };
        let response = self.client.get(&path)?;
        ResourceResponse::from_http(response, as_json, Subscriber::from_json_list)
    }

    /// Lists active subscribers.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn active(
        &self,
        params: ListParams,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        self.all(params, Some(SubscriberType::Active), as_json)
    }

    /// Lists unsubscribed subscribers.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn unsubscribed(
        &self,
        params: ListParams,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        self.all(params, Some(SubscriberType::Unsubscribed), as_json)
    }

    /// Lists bounced subscribers.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn bounced(
        &self,
        params: ListParams,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        self.all(params, Some(SubscriberType::Bounced), as_json)
    }

    /// Lists junk subscribers.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn junk(
        &self,
        params: ListParams,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        self.all(params, Some(SubscriberType::Junk), as_json)
    }

    /// Lists unconfirmed subscribers.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn unconfirmed(
        &self,
        params: ListParams,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        self.all(params, Some(SubscriberType::Unconfirmed), as_json)
    }

    /// Fetches one subscriber by ID or email.
    ///
    /// A missing subscriber is an [`ResourceError::Http`] with status 404.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn get(
        &self,
        id: &SubscriberId,
        as_json: bool,
    ) -> Result<ResourceResponse<Subscriber>, ResourceError> {
        let response = self.client.get(&build_url(&[&"subscribers", id], &[]))?;
        ResourceResponse::from_http(response, as_json, Subscriber::from_json)
    }

    /// Creates a subscriber.
    ///
    /// The payload needs `email` and may hold `name`, `fields`,
    /// `resubscribe`, `type`, `signup_ip`, `signup_timestamp`,
    /// `confirmation_ip` and `confirmation_timestamp`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] before sending when the payload
    /// is rejected.
    pub fn create(
        &self,
        data: &Value,
        as_json: bool,
    ) -> Result<ResourceResponse<Subscriber>, ResourceError> {
        CREATE_SCHEMA.validate(data)?;
        let response = self.client.post(&build_url(&[&"subscribers"], &[]), Some(data))?;
        ResourceResponse::from_http(response, as_json, Subscriber::from_json)
    }

    /// Updates a subscriber.
    ///
    /// The payload may hold `name`, `fields`, `resubscribe` and `type`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ImmutableField`] whenever the payload holds
    /// `email`, whatever else it contains, and the other
    /// [`ResourceError::Validation`] kinds for rejected payloads.
    pub fn update(
        &self,
        id: &SubscriberId,
        data: &Value,
        as_json: bool,
    ) -> Result<ResourceResponse<Subscriber>, ResourceError> {
        validate_update(data)?;
        let response = self.client.put(&build_url(&[&"subscribers", id], &[]), data)?;
        ResourceResponse::from_http(response, as_json, Subscriber::from_json)
    }

    /// Removes a subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn delete(&self, id: u64) -> Result<HttpResponse, ResourceError> {
        Ok(self.client.delete(&build_url(&[&"subscribers", &id], &[]))?)
    }

    /// Searches subscribers by email or name.
    ///
    /// A `minimized` answer only carries `id`, `email` and `type`.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn search(
        &self,
        query: Option<&str>,
        params: ListParams,
        minimized: bool,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Subscriber>>, ResourceError> {
        let segments: &[&dyn fmt::Display] = &[&"subscribers", &"search"];
        let path = match query {
            Some(query) => build_url(
                segments,
                &[
                    ("limit", &params.limit),
                    ("offset", &params.offset),
                    ("minimized", &minimized),
                    ("query", &query),
                ],
            ),
            None => build_url(
                segments,
                &[
                    ("limit", &params.limit),
                    ("offset", &params.offset),
                    ("minimized", &minimized),
                ],
            ),
        };
        let response = self.client.get(&path)?;
        ResourceResponse::from_http(response, as_json, Subscriber::from_json_list)
    }

    /// Lists the groups a subscriber belongs to.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn groups(
        &self,
        id: &SubscriberId,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Group>>, ResourceError> {
        let response = self
            .client
            .get(&build_url(&[&"subscribers", id, &"groups"], &[]))?;
        ResourceResponse::from_http(response, as_json, Group::from_json_list)
    }

    /// Lists a subscriber's activity, optionally of one kind.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn activity(
        &self,
        id: &SubscriberId,
        atype: Option<ActivityType>,
        as_json: bool,
    ) -> Result<ResourceResponse<Vec<Activity>>, ResourceError> {
        let path = match atype {
            Some(atype) => build_url(&[&"subscribers", id, &"activity", &atype], &[]),
            None => build_url(&[&"subscribers", id, &"activity"], &[]),
        };
        let response = self.client.get(&path)?;
        ResourceResponse::from_http(response, as_json, Activity::from_json_list)
    }

    /// Returns the number of subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] when the answer has no `count`.
    pub fn count(&self) -> Result<u64, ResourceError> {
        let body = self
            .client
            .get(&build_url(&[&"subscribers", &"count"], &[]))?
            .into_body();
        required_count(&body)
    }
}

fn validate_update(data: &Value) -> Result<(), ValidationError> {
    if as_object(data)?.contains_key("email") {
        return Err(ValidationError::ImmutableField { field: "email" });
    }
    UPDATE_SCHEMA.validate(data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::record::assert_fields_match;
    use serde_json::json;

    #[test]
    fn test_fields_match_serialized_keys() {
        assert_fields_match::<Subscriber>();
        assert_fields_match::<Activity>();
    }

    #[test]
    fn test_resolve_prefers_id() {
        assert_eq!(
            SubscriberId::resolve(Some(7), Some("a@b.c")).unwrap(),
            SubscriberId::Id(7)
        );
        assert_eq!(
            SubscriberId::resolve(None, Some("a@b.c")).unwrap(),
            SubscriberId::Email("a@b.c".to_string())
        );
        assert_eq!(
            SubscriberId::resolve(None, None),
            Err(ValidationError::MissingIdentifier)
        );
    }

    #[test]
    fn test_subscriber_maps_custom_fields() {
        let subscriber = Subscriber::from_json(json!({
            "id": 1343965485,
            "name": "John",
            "email": "demo@mailerlite.com",
            "sent": 0,
            "opened": 0,
            "clicked": 0,
            "type": "active",
            "fields": [
                {"key": "email", "value": "demo@mailerlite.com", "type": "TEXT"},
                {"key": "age", "value": 30, "type": "NUMBER"}
            ],
            "date_subscribe": null,
            "opened_rate": 0,
            "country_id": null
        }))
        .unwrap();

        assert_eq!(subscriber.subscriber_type.as_deref(), Some("active"));
        let fields = subscriber.fields.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].value, Some(json!(30)));
        assert!(subscriber.country_id.is_none());
    }

    #[test]
    fn test_activity_maps_dotted_keys() {
        let activity = Activity::from_json(json!({
            "date": "2016-03-30 10:00:00",
            "report_id": 12,
            "subject": "Hello",
            "type": "opens",
            "link_id": null,
            "link": null,
            "receiver": {"name": "John", "email": "john@example.com"},
            "receiver.name": "John",
            "receiver.email": "john@example.com",
            "sender.name": "Shop",
            "sender.email": "shop@example.com"
        }))
        .unwrap();

        assert_eq!(activity.activity_type.as_deref(), Some("opens"));
        assert_eq!(activity.receiver_email.as_deref(), Some("john@example.com"));
        assert_eq!(activity.sender_name.as_deref(), Some("Shop"));
        assert!(activity.sender.is_none());
    }

    #[test]
    fn test_create_schema() {
        assert!(CREATE_SCHEMA
            .validate(&json!({"email": "a@b.c", "name": "A", "fields": {"company": "X"}}))
            .is_ok());
        assert!(matches!(
            CREATE_SCHEMA.validate(&json!("field_name")),
            Err(ValidationError::NotAnObject { .. })
        ));
        assert!(matches!(
            CREATE_SCHEMA.validate(&json!({"mail": "a@b.c"})),
            Err(ValidationError::MissingKeys { .. })
        ));
        assert!(matches!(
            CREATE_SCHEMA.validate(&json!({"email": "a@b.c", "group": 12345})),
            Err(ValidationError::UnknownKeys { .. })
        ));
    }

    #[test]
    fn test_update_rejects_email_unconditionally() {
        for data in [
            json!({"email": "new@mail.com"}),
            json!({"email": "new@mail.com", "name": "Jack"}),
            json!({"email": "new@mail.com", "random": 1}),
        ] {
            assert_eq!(
                validate_update(&data),
                Err(ValidationError::ImmutableField { field: "email" })
            );
        }
    }

    #[test]
    fn test_update_schema() {
        assert!(validate_update(&json!({"name": "Jack"})).is_ok());
        assert!(matches!(
            validate_update(&json!({"random": "new@mail.com"})),
            Err(ValidationError::UnknownKeys { .. })
        ));
    }
}
