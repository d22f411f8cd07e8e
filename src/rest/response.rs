//! Response wrapper for resource read operations.
//!
//! Read operations either map the body onto a record or, when asked for raw
//! JSON or when the body is empty, hand the decoded value back untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::rest::ResourceResponse;
//!
//! match api.groups().get(42, false)? {
//!     ResourceResponse::Record(group) => println!("Group: {:?}", group.name),
//!     ResourceResponse::Json(value) => println!("Raw: {value}"),
//! }
//! ```

use serde_json::Value;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// The result of a read operation.
///
/// # Example
///
/// ```rust
/// use mailerlite::rest::ResourceResponse;
/// use serde_json::json;
///
/// let response: ResourceResponse<u64> = ResourceResponse::Record(3);
/// assert_eq!(response.record(), Some(&3));
///
/// let response: ResourceResponse<u64> = ResourceResponse::Json(json!({}));
/// assert!(response.is_json());
/// assert!(response.into_record().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceResponse<T> {
    /// The body mapped onto a record.
    Record(T),
    /// The decoded body, unmapped.
    Json(Value),
}

impl<T> ResourceResponse<T> {
    /// Returns `true` if the body was mapped.
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns `true` if the body was returned unmapped.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns the mapped record, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&T> {
        match self {
            Self::Record(record) => Some(record),
            Self::Json(_) => None,
        }
    }

    /// Consumes the response and returns the mapped record, if any.
    #[must_use]
    pub fn into_record(self) -> Option<T> {
        match self {
            Self::Record(record) => Some(record),
            Self::Json(_) => None,
        }
    }

    /// Returns the unmapped body, if any.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match self {
            Self::Record(_) => None,
            Self::Json(value) => Some(value),
        }
    }

    /// Consumes the response and returns the unmapped body, if any.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Record(_) => None,
            Self::Json(value) => Some(value),
        }
    }

    /// Maps the record, leaving an unmapped body as is.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResourceResponse<U> {
        match self {
            Self::Record(record) => ResourceResponse::Record(f(record)),
            Self::Json(value) => ResourceResponse::Json(value),
        }
    }

    /// Builds the response of a read operation.
    ///
    /// The body is returned unmapped when `as_json` is set or the body is
    /// empty; otherwise `mapper` converts it.
    ///
    /// # Errors
    ///
    /// Returns the error of `mapper`.
    pub fn from_http(
        response: HttpResponse,
        as_json: bool,
        mapper: impl FnOnce(Value) -> Result<T, ResourceError>,
    ) -> Result<Self, ResourceError> {
        let body = response.into_body();
        if as_json || is_empty_body(&body) {
            return Ok(Self::Json(body));
        }
        mapper(body).map(Self::Record)
    }
}

/// Returns `true` for bodies that carry nothing to map.
#[must_use]
pub fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn count(value: Value) -> Result<u64, ResourceError> {
        Ok(serde_json::from_value(value["count"].clone())?)
    }

    #[test]
    fn test_maps_non_empty_body() {
        let response = HttpResponse::Json {
            code: 200,
            body: json!({"count": 7}),
        };
        let result = ResourceResponse::from_http(response, false, count).unwrap();
        assert_eq!(result, ResourceResponse::Record(7));
    }

    #[test]
    fn test_as_json_skips_mapping() {
        let response = HttpResponse::Json {
            code: 200,
            body: json!({"count": 7}),
        };
        let result = ResourceResponse::from_http(response, true, count).unwrap();
        assert_eq!(result, ResourceResponse::Json(json!({"count": 7})));
    }

    #[test]
    fn test_empty_bodies_are_returned_unmapped() {
        for body in [json!({}), json!([]), Value::Null] {
            let response = HttpResponse::Json {
                code: 200,
                body: body.clone(),
            };
            let result = ResourceResponse::from_http(response, false, count).unwrap();
            assert_eq!(result, ResourceResponse::Json(body));
        }

        let result = ResourceResponse::from_http(HttpResponse::NoContent, false, count).unwrap();
        assert_eq!(result, ResourceResponse::Json(Value::Null));
    }

    #[test]
    fn test_mapper_errors_propagate() {
        let response = HttpResponse::Json {
            code: 200,
            body: json!({"count": "seven"}),
        };
        let result = ResourceResponse::from_http(response, false, count);
        assert!(matches!(result, Err(ResourceError::Decode(_))));
    }

    #[test]
    fn test_map_keeps_json() {
        let response: ResourceResponse<u64> = ResourceResponse::Json(json!([]));
        assert_eq!(response.map(|n| n + 1), ResourceResponse::Json(json!([])));
        assert_eq!(ResourceResponse::Record(1).map(|n| n + 1).record(), Some(&2));
    }
}
