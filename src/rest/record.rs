//! Mapping of JSON response objects onto fixed-shape records.
//!
//! Every MailerLite resource type is a plain struct whose fields are all
//! optional. The [`Record`] trait adds the declared wire names so drift in
//! the API can be detected: keys the record does not know are ignored and
//! logged, never mapped onto a neighbouring field.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::rest::ResourceError;

/// A fixed-shape record returned by the MailerLite API.
///
/// # Implementing
///
/// ```rust
/// use mailerlite::rest::Record;
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize)]
/// struct Tag {
///     id: Option<u64>,
///     name: Option<String>,
/// }
///
/// impl Record for Tag {
///     const NAME: &'static str = "Tag";
///     const FIELDS: &'static [&'static str] = &["id", "name"];
/// }
///
/// let value = serde_json::json!({"id": 1, "colour": "red"});
/// assert_eq!(Tag::unknown_keys(&value), vec!["colour".to_string()]);
///
/// let tag = Tag::from_json(value).unwrap();
/// assert_eq!(tag.id, Some(1));
/// assert!(tag.name.is_none());
/// ```
pub trait Record: DeserializeOwned {
    /// The record name used in log events.
    const NAME: &'static str;

    /// The declared field names, in wire order.
    const FIELDS: &'static [&'static str];

    /// Returns the keys of `value` this record does not declare, sorted.
    ///
    /// Non-object values have no keys and return an empty list.
    fn unknown_keys(value: &Value) -> Vec<String> {
        let Some(map) = value.as_object() else {
            return Vec::new();
        };

        let mut keys: Vec<String> = map
            .keys()
            .filter(|key| !Self::FIELDS.contains(&key.as_str()))
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    /// Maps one JSON object onto the record.
    ///
    /// Absent and `null` fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] when a field holds a value of the
    /// wrong JSON type or `value` is not an object.
    fn from_json(value: Value) -> Result<Self, ResourceError> {
        warn_unknown::<Self>(&Self::unknown_keys(&value));
        Ok(serde_json::from_value(value)?)
    }

    /// Maps a JSON array of objects onto a list of records.
    ///
    /// Unknown keys are collected across all items and logged once.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] when `value` is not an array or an
    /// item fails to map.
    fn from_json_list(value: Value) -> Result<Vec<Self>, ResourceError> {
        let Value::Array(items) = value else {
            return Ok(serde_json::from_value(value)?);
        };

        let mut unknown: Vec<String> = items.iter().flat_map(Self::unknown_keys).collect();
        unknown.sort();
        unknown.dedup();
        warn_unknown::<Self>(&unknown);

        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ResourceError::from))
            .collect()
    }
}

fn warn_unknown<T: Record>(unknown: &[String]) {
    if !unknown.is_empty() {
        tracing::warn!(
            record = T::NAME,
            unknown = ?unknown,
            "ignoring keys not declared by the record"
        );
    }
}

/// Asserts that a record's `FIELDS` list matches the keys it serializes.
#[cfg(test)]
pub(crate) fn assert_fields_match<T>()
where
    T: Record + Default + serde::Serialize,
{
    let value = serde_json::to_value(T::default()).unwrap();
    let mut serialized: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    serialized.sort_unstable();

    let mut declared = T::FIELDS.to_vec();
    declared.sort_unstable();

    assert_eq!(serialized, declared, "{} FIELDS out of sync", T::NAME);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: Option<u64>,
        name: Option<String>,
    }

    impl Record for Sample {
        const NAME: &'static str = "Sample";
        const FIELDS: &'static [&'static str] = &["id", "name"];
    }

    #[test]
    fn test_absent_and_null_fields_default_to_none() {
        let sample = Sample::from_json(json!({"id": 5, "name": null})).unwrap();
        assert_eq!(
            sample,
            Sample {
                id: Some(5),
                name: None
            }
        );

        let sample = Sample::from_json(json!({})).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored_not_shifted() {
        let value = json!({"extra": "x", "id": 2, "another": 1});
        assert_eq!(Sample::unknown_keys(&value), vec!["another", "extra"]);

        let sample = Sample::from_json(value).unwrap();
        assert_eq!(sample.id, Some(2));
        assert!(sample.name.is_none());
    }

    #[test]
    fn test_wrong_type_is_a_decode_error() {
        let result = Sample::from_json(json!({"id": "not-a-number"}));
        assert!(matches!(result, Err(ResourceError::Decode(_))));
    }

    #[test]
    fn test_from_json_list() {
        let samples =
            Sample::from_json_list(json!([{"id": 1}, {"id": 2, "name": "b"}])).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].name.as_deref(), Some("b"));

        assert!(matches!(
            Sample::from_json_list(json!({"id": 1})),
            Err(ResourceError::Decode(_))
        ));
    }

    #[test]
    fn test_unknown_keys_of_non_object_is_empty() {
        assert!(Sample::unknown_keys(&json!([1, 2])).is_empty());
    }

    #[test]
    fn test_sample_fields_match() {
        assert_fields_match::<Sample>();
    }
}
