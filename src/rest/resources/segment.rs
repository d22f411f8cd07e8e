//! Segment resource implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{build_url, HttpClient};
use crate::rest::{ListParams, Order, Record, ResourceError, ResourceResponse};

use super::common::{count_of, missing_key, resource_constructors, Meta};

/// A dynamic subscriber segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// The identifier.
    pub id: Option<u64>,
    /// The display title.
    pub title: Option<String>,
    /// The segment's filter definition, as returned by the API.
    pub filter: Option<Value>,
    /// Number of subscribers in the segment.
    pub total: Option<u64>,
    /// Number of emails sent to the segment.
    pub sent: Option<u64>,
    /// Number of opens in the segment.
    pub opened: Option<u64>,
    /// Number of clicks in the segment.
    pub clicked: Option<u64>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Whether computing the segment timed out.
    pub timed_out: Option<bool>,
}

impl Record for Segment {
    const NAME: &'static str = "Segment";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "filter",
        "total",
        "sent",
        "opened",
        "clicked",
        "created_at",
        "updated_at",
        "timed_out",
    ];
}

/// One page of segments with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentPage {
    /// The segments on this page.
    pub data: Option<Vec<Segment>>,
    /// Pagination metadata.
    pub meta: Option<Meta>,
}

impl Record for SegmentPage {
    const NAME: &'static str = "SegmentPage";
    const FIELDS: &'static [&'static str] = &["data", "meta"];
}

/// Segment operations.
#[derive(Debug, Clone)]
pub struct Segments {
    client: Arc<HttpClient>,
}

resource_constructors!(Segments);

impl Segments {
    /// Lists one page of segments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure and
    /// [`ResourceError::Decode`] when the page cannot be mapped.
    pub fn all(
        &self,
        params: ListParams,
        order: Order,
        as_json: bool,
    ) -> Result<ResourceResponse<SegmentPage>, ResourceError> {
        let path = build_url(
            &[&"segments"],
            &[
                ("limit", &params.limit),
                ("offset", &params.offset),
                ("order", &order),
            ],
        );
        let response = self.client.get(&path)?;
        ResourceResponse::from_http(response, as_json, SegmentPage::from_json)
    }

    /// Returns the number of segments.
    ///
    /// Falls back to the length of `data` when the answer has no `count`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] when the answer has neither.
    pub fn count(&self) -> Result<u64, ResourceError> {
        let body = self
            .client
            .get(&build_url(&[&"segments", &"count"], &[]))?
            .into_body();
        count_or_len(&body, "data")
    }
}

/// Reads `count`, or the length of the list under `list_key`.
pub(crate) fn count_or_len(body: &Value, list_key: &'static str) -> Result<u64, ResourceError> {
    if let Some(count) = count_of(body) {
        return Ok(count);
    }
    body.get(list_key)
        .and_then(Value::as_array)
        .map(|items| items.len() as u64)
        .ok_or_else(|| missing_key("count"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::record::assert_fields_match;
    use serde_json::json;

    #[test]
    fn test_fields_match_serialized_keys() {
        assert_fields_match::<Segment>();
        assert_fields_match::<SegmentPage>();
    }

    #[test]
    fn test_segment_page_from_json() {
        let page = SegmentPage::from_json(json!({
            "data": [
                {"id": 1, "title": "Openers", "filter": {"rules": []}, "total": 5, "timed_out": false}
            ],
            "meta": {
                "pagination": {"total": 1, "count": 1, "per_page": 100, "current_page": 1, "total_pages": 1, "links": []}
            }
        }))
        .unwrap();

        let data = page.data.unwrap();
        assert_eq!(data[0].title.as_deref(), Some("Openers"));
        assert_eq!(data[0].timed_out, Some(false));
        assert_eq!(page.meta.unwrap().pagination.unwrap().total_pages, Some(1));
    }

    #[test]
    fn test_count_falls_back_to_data_length() {
        assert_eq!(count_or_len(&json!({"count": 4}), "data").unwrap(), 4);
        assert_eq!(count_or_len(&json!({"data": [{}, {}]}), "data").unwrap(), 2);
        assert!(matches!(
            count_or_len(&json!({}), "data"),
            Err(ResourceError::Decode(_))
        ));
    }
}
