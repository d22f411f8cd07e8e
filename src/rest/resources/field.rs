//! Custom field resource implementation.
//!
//! The API has no endpoint for a single field, so [`Fields::get`] fetches
//! the whole collection and picks the match.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{build_url, HttpClient, HttpResponse};
use crate::rest::{FieldType, Record, ResourceError, ResourceResponse};

use super::common::resource_constructors;

/// A custom subscriber field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Field {
    /// The identifier.
    pub id: Option<u64>,
    /// The display title.
    pub title: Option<String>,
    /// The key used in subscriber payloads.
    pub key: Option<String>,
    /// The data type, `type` on the wire.
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    /// Creation timestamp.
    pub date_created: Option<String>,
    /// Last update timestamp.
    pub date_updated: Option<String>,
}

impl Record for Field {
    const NAME: &'static str = "Field";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "key",
        "type",
        "date_created",
        "date_updated",
    ];
}

/// Custom field operations.
#[derive(Debug, Clone)]
pub struct Fields {
    client: Arc<HttpClient>,
}

resource_constructors!(Fields);

impl Fields {
    /// Lists all custom fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure and
    /// [`ResourceError::Decode`] when a field cannot be mapped.
    pub fn all(&self, as_json: bool) -> Result<ResourceResponse<Vec<Field>>, ResourceError> {
        let response = self.client.get(&build_url(&[&"fields"], &[]))?;
        ResourceResponse::from_http(response, as_json, Field::from_json_list)
    }

    /// Finds one field by ID among all fields.
    ///
    /// Returns `None` when no field has that ID.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn get(&self, id: u64) -> Result<Option<Field>, ResourceError> {
        let fields = self.all(false)?.into_record().unwrap_or_default();
        Ok(fields.into_iter().find(|field| field.id == Some(id)))
    }

    /// Creates a field and returns the API answer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn create(&self, title: &str, field_type: FieldType) -> Result<Value, ResourceError> {
        let body = json!({
            "title": title,
            "type": field_type.as_str(),
        });
        let response = self.client.post(&build_url(&[&"fields"], &[]), Some(&body))?;
        Ok(response.into_body())
    }

    /// Renames a field.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    pub fn update(
        &self,
        id: u64,
        title: &str,
        as_json: bool,
    ) -> Result<ResourceResponse<Field>, ResourceError> {
        let body = json!({ "title": title });
        let response = self.client.put(&build_url(&[&"fields", &id], &[]), &body)?;
        ResourceResponse::from_http(response, as_json, Field::from_json)
    }

    /// Removes a field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn delete(&self, id: u64) -> Result<HttpResponse, ResourceError> {
        Ok(self.client.delete(&build_url(&[&"fields", &id], &[]))?)
    }
}
