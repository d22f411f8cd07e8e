//! Key validation for request payloads.

use serde_json::{Map, Value};

use crate::clients::json_type_name;
use crate::rest::ValidationError;

/// The accepted keys of a request payload.
///
/// A payload passes when it is a JSON object holding every required key and
/// no key outside the required and optional sets.
///
/// # Example
///
/// ```rust
/// use mailerlite::rest::{PayloadSchema, ValidationError};
/// use serde_json::json;
///
/// const SCHEMA: PayloadSchema = PayloadSchema::new(&["email"], &["name"]);
///
/// assert!(SCHEMA.validate(&json!({"email": "a@b.c", "name": "A"})).is_ok());
/// assert!(matches!(
///     SCHEMA.validate(&json!({"name": "A"})),
///     Err(ValidationError::MissingKeys { .. })
/// ));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayloadSchema {
    required: &'static [&'static str],
    optional: &'static [&'static str],
}

impl PayloadSchema {
    /// Creates a schema from its required and optional keys.
    #[must_use]
    pub const fn new(required: &'static [&'static str], optional: &'static [&'static str]) -> Self {
        Self { required, optional }
    }

    /// Returns the required keys.
    #[must_use]
    pub const fn required(&self) -> &'static [&'static str] {
        self.required
    }

    /// Returns the optional keys.
    #[must_use]
    pub const fn optional(&self) -> &'static [&'static str] {
        self.optional
    }

    /// Checks a payload against the schema and returns it as an object.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`ValidationError::NotAnObject`] for a non-object payload
    /// - [`ValidationError::MissingKeys`] when a required key is absent
    /// - [`ValidationError::UnknownKeys`] when a key is not accepted
    pub fn validate<'a>(&self, payload: &'a Value) -> Result<&'a Map<String, Value>, ValidationError> {
        let map = as_object(payload)?;

        let mut missing: Vec<String> = self
            .required
            .iter()
            .filter(|key| !map.contains_key(**key))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Err(ValidationError::MissingKeys { keys: missing });
        }

        let mut unknown: Vec<String> = map
            .keys()
            .filter(|key| !self.accepts(key))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(ValidationError::UnknownKeys { keys: unknown });
        }

        Ok(map)
    }

    fn accepts(&self, key: &str) -> bool {
        self.required.contains(&key) || self.optional.contains(&key)
    }
}

/// Returns the payload as an object or fails with [`ValidationError::NotAnObject`].
pub(crate) fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload.as_object().ok_or(ValidationError::NotAnObject {
        found: json_type_name(payload),
    })
}
