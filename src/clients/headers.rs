//! Credential headers shared by every request.
//!
//! MailerLite authenticates each call with two headers, `content-type` and
//! `x-mailerlite-apikey`. [`Headers`] can only be constructed once both are
//! present, so every [`HttpClient`](crate::clients::HttpClient) built from it
//! is in a valid state before the first request.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::config::ApiKey;
use crate::error::ConfigError;

/// Header carrying the request content type.
pub const CONTENT_TYPE_HEADER: &str = "content-type";

/// Header carrying the MailerLite API key.
pub const API_KEY_HEADER: &str = "x-mailerlite-apikey";

const REQUIRED_HEADERS: [&str; 2] = [CONTENT_TYPE_HEADER, API_KEY_HEADER];

/// Validates a candidate headers value.
///
/// The candidate fails when it is empty (`null`, `{}`, `[]`, `""`, `0`,
/// `false`), when it is not a JSON object, or when it lacks either of the
/// required headers. Header names are compared case-insensitively.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyHeaders`], [`ConfigError::HeadersNotMapping`]
/// or [`ConfigError::MissingRequiredHeaders`].
///
/// # Example
///
/// ```rust
/// use mailerlite::clients::check_headers;
/// use mailerlite::ConfigError;
/// use serde_json::json;
///
/// assert!(check_headers(&json!({
///     "content-type": "application/json",
///     "x-mailerlite-apikey": "key",
/// }))
/// .is_ok());
///
/// assert_eq!(check_headers(&json!({})), Err(ConfigError::EmptyHeaders));
/// ```
pub fn check_headers(candidate: &Value) -> Result<(), ConfigError> {
    if is_empty(candidate) {
        return Err(ConfigError::EmptyHeaders);
    }

    let Value::Object(map) = candidate else {
        return Err(ConfigError::HeadersNotMapping {
            found: json_type_name(candidate),
        });
    };

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    check_required(&keys)
}

fn check_required(keys: &[&str]) -> Result<(), ConfigError> {
    let missing: Vec<&'static str> = REQUIRED_HEADERS
        .into_iter()
        .filter(|required| !keys.iter().any(|key| key.eq_ignore_ascii_case(required)))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingRequiredHeaders { missing })
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Names the JSON type of a value for error messages.
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A validated set of request headers.
///
/// Header names are stored lowercase. The API key value is masked in the
/// `Debug` output.
///
/// # Example
///
/// ```rust
/// use mailerlite::clients::Headers;
/// use mailerlite::ApiKey;
///
/// let headers = Headers::from_api_key(&ApiKey::new("my-key").unwrap());
/// assert_eq!(headers.get("Content-Type"), Some("application/json"));
/// assert_eq!(headers.api_key(), "my-key");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    /// Builds headers from a string mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHeaders`] for an empty map, or
    /// [`ConfigError::MissingRequiredHeaders`] when a required header is absent.
    pub fn new(headers: HashMap<String, String>) -> Result<Self, ConfigError> {
        if headers.is_empty() {
            return Err(ConfigError::EmptyHeaders);
        }
        let keys: Vec<&str> = headers.keys().map(String::as_str).collect();
        check_required(&keys)?;

        Ok(Self(
            headers
                .into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), value))
                .collect(),
        ))
    }

    /// Builds headers from an arbitrary JSON value, running [`check_headers`] on it.
    ///
    /// Non-string header values are stored in their JSON text form.
    ///
    /// # Errors
    ///
    /// Returns the [`check_headers`] error for an invalid candidate.
    pub fn from_json(candidate: &Value) -> Result<Self, ConfigError> {
        check_headers(candidate)?;

        let map = candidate
            .as_object()
            .into_iter()
            .flatten()
            .map(|(key, value)| {
                let value = value
                    .as_str()
                    .map_or_else(|| value.to_string(), ToString::to_string);
                (key.to_ascii_lowercase(), value)
            })
            .collect();

        Ok(Self(map))
    }

    /// Builds the canonical JSON headers for an API key.
    #[must_use]
    pub fn from_api_key(api_key: &ApiKey) -> Self {
        let mut map = HashMap::new();
        map.insert(CONTENT_TYPE_HEADER.to_string(), "application/json".to_string());
        map.insert(API_KEY_HEADER.to_string(), api_key.as_ref().to_string());
        Self(map)
    }

    /// Returns the value of a header, looked up case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Returns the API key header value.
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.get(API_KEY_HEADER).unwrap_or_default()
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no headers. Never the case for a constructed value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.0 {
            if key == API_KEY_HEADER {
                map.entry(key, &"*****");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

impl TryFrom<HashMap<String, String>> for Headers {
    type Error = ConfigError;

    fn try_from(headers: HashMap<String, String>) -> Result<Self, Self::Error> {
        Self::new(headers)
    }
}
