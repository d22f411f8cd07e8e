//! Request path construction.

use std::fmt::{Display, Write};

/// Joins path segments with `/` and appends URL-encoded query parameters.
///
/// Segments are stringified and percent-encoded, so `#`, `?` and `/` inside
/// a segment never change the route. Query parameters keep their insertion
/// order and the `?` is only added when at least one is given.
///
/// # Example
///
/// ```rust
/// use mailerlite::clients::build_url;
///
/// assert_eq!(build_url(&[&"test", &125], &[]), "test/125");
/// assert_eq!(build_url(&[&"test", &125], &[("id", &"my_id")]), "test/125?id=my_id");
/// assert_eq!(
///     build_url(&[&"test", &125], &[("id", &"my_id"), ("value", &123)]),
///     "test/125?id=my_id&value=123"
/// );
/// ```
#[must_use]
pub fn build_url(segments: &[&dyn Display], query: &[(&str, &dyn Display)]) -> String {
    let mut url = segments
        .iter()
        .map(|segment| encode_segment(&segment.to_string()))
        .collect::<Vec<_>>()
        .join("/");

    for (i, (key, value)) in query.iter().enumerate() {
        let sep = if i == 0 { '?' } else { '&' };
        let value = value.to_string();
        // Writing to a String cannot fail.
        let _ = write!(
            url,
            "{sep}{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&value)
        );
    }

    url
}

/// Percent-encodes one path segment. `@` is a valid path character and is
/// kept so email identifiers stay readable.
fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).replace("%40", "@")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_only() {
        assert_eq!(build_url(&[&"test", &125], &[]), "test/125");
        assert_eq!(build_url(&[&"batch"], &[]), "batch");
    }

    #[test]
    fn test_single_query_param() {
        assert_eq!(
            build_url(&[&"test", &125], &[("id", &"my_id")]),
            "test/125?id=my_id"
        );
    }

    #[test]
    fn test_query_params_preserve_insertion_order() {
        assert_eq!(
            build_url(&[&"test", &125], &[("id", &"my_id"), ("value", &123)]),
            "test/125?id=my_id&value=123"
        );
        assert_eq!(
            build_url(&[&"test"], &[("value", &123), ("id", &"my_id")]),
            "test?value=123&id=my_id"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        assert_eq!(
            build_url(&[&"subscribers", &"search"], &[("query", &"john doe+1@example.com")]),
            "subscribers/search?query=john%20doe%2B1%40example.com"
        );
    }

    #[test]
    fn test_email_segment_keeps_at_sign() {
        assert_eq!(
            build_url(&[&"subscribers", &"demo@mailerlite.com"], &[]),
            "subscribers/demo@mailerlite.com"
        );
    }

    #[test]
    fn test_reserved_characters_in_segments_are_encoded() {
        assert_eq!(
            build_url(&[&"subscribers", &"a#b@example.com", &"groups"], &[]),
            "subscribers/a%23b@example.com/groups"
        );
        assert_eq!(
            build_url(&[&"subscribers", &"a?b@example.com", &"groups"], &[]),
            "subscribers/a%3Fb@example.com/groups"
        );
        assert_eq!(
            build_url(&[&"groups", &9, &"subscribers", &"a/b@example.com"], &[]),
            "groups/9/subscribers/a%2Fb@example.com"
        );
    }
}
