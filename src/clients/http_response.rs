//! HTTP response type returned by [`HttpClient`](crate::clients::HttpClient).

use serde_json::Value;

/// A successful response from the MailerLite API.
///
/// A `204 No Content` reply is its own variant so it can never be confused
/// with a body that happens to be an empty JSON object.
///
/// # Example
///
/// ```rust
/// use mailerlite::clients::HttpResponse;
/// use serde_json::json;
///
/// let empty = HttpResponse::Json { code: 200, body: json!({}) };
/// assert!(!empty.is_no_content());
/// assert!(HttpResponse::NoContent.is_no_content());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum HttpResponse {
    /// The server answered `204 No Content`.
    NoContent,
    /// Any other 2xx answer with its decoded JSON body.
    ///
    /// An empty body decodes to [`Value::Null`].
    Json {
        /// The HTTP status code.
        code: u16,
        /// The decoded response body.
        body: Value,
    },
}

impl HttpResponse {
    /// Returns `true` for a `204 No Content` reply.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }

    /// Returns the status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::NoContent => 204,
            Self::Json { code, .. } => *code,
        }
    }

    /// Returns the decoded body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        match self {
            Self::NoContent => None,
            Self::Json { body, .. } => Some(body),
        }
    }

    /// Consumes the response and returns the body, `Value::Null` for no content.
    #[must_use]
    pub fn into_body(self) -> Value {
        match self {
            Self::NoContent => Value::Null,
            Self::Json { body, .. } => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_content_is_distinct_from_empty_object() {
        let empty = HttpResponse::Json {
            code: 200,
            body: json!({}),
        };
        assert_ne!(HttpResponse::NoContent, empty);
        assert!(HttpResponse::NoContent.body().is_none());
        assert_eq!(empty.body(), Some(&json!({})));
    }

    #[test]
    fn test_code_reports_status() {
        assert_eq!(HttpResponse::NoContent.code(), 204);
        let created = HttpResponse::Json {
            code: 201,
            body: json!({"id": 1}),
        };
        assert_eq!(created.code(), 201);
    }

    #[test]
    fn test_into_body() {
        assert_eq!(HttpResponse::NoContent.into_body(), Value::Null);
        let response = HttpResponse::Json {
            code: 200,
            body: json!([1, 2]),
        };
        assert_eq!(response.into_body(), json!([1, 2]));
    }
}
