//! Error types for resource operations.
//!
//! Resource methods fail in one of four ways, unified by [`ResourceError`]:
//!
//! - **Config**: an enum argument (order, status, type) was not accepted
//! - **Validation**: a payload or identifier was rejected before sending
//! - **Http**: the transport failed or the API answered with 400 or more
//! - **Decode**: a response body did not fit the expected record
//!
//! Only the `Http` kind ever performs network I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::rest::{ResourceError, ValidationError};
//! use serde_json::json;
//!
//! match api.subscribers().update(&id, &json!({"email": "new@example.com"}), false) {
//!     Err(ResourceError::Validation(ValidationError::ImmutableField { field })) => {
//!         println!("'{field}' cannot be changed");
//!     }
//!     Err(e) if e.status() == Some(404) => println!("No such subscriber"),
//!     Err(e) => println!("Other error: {e}"),
//!     Ok(subscriber) => println!("Updated: {subscriber:?}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;

/// A request payload or identifier rejected before anything is sent.
///
/// Key lists are sorted so messages are deterministic.
///
/// # Example
///
/// ```rust
/// use mailerlite::rest::ValidationError;
///
/// let error = ValidationError::MissingKeys {
///     keys: vec!["email".to_string()],
/// };
/// assert!(error.to_string().contains("email"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload is not a JSON object.
    #[error("Payload should be a JSON object, got {found}.")]
    NotAnObject {
        /// The JSON type that was provided instead.
        found: &'static str,
    },

    /// A required key is absent.
    #[error("Some required keys are missing: {keys:?}.")]
    MissingKeys {
        /// The missing keys, sorted.
        keys: Vec<String>,
    },

    /// The payload holds keys that are neither required nor optional.
    #[error("Some keys are not accepted: {keys:?}.")]
    UnknownKeys {
        /// The unexpected keys, sorted.
        keys: Vec<String>,
    },

    /// The payload tries to change a field that cannot be updated.
    #[error("The '{field}' field cannot be updated.")]
    ImmutableField {
        /// The name of the field.
        field: &'static str,
    },

    /// Neither an ID nor an email identified the subscriber.
    #[error("An ID or an email address is required.")]
    MissingIdentifier,

    /// Campaign content lacks a placeholder the API requires.
    #[error("{content} content should contain the '{placeholder}' placeholder.")]
    MissingPlaceholder {
        /// Which content was checked (`html` or `plain`).
        content: &'static str,
        /// The missing placeholder.
        placeholder: &'static str,
    },
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An argument could not be parsed into an accepted value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request failed validation before being sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response could not be mapped to a record.
    #[error("Failed to map response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ResourceError {
    /// Returns the remote status code, if the error came from a response.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailerlite::clients::{HttpError, HttpResponseError};
    /// use mailerlite::rest::ResourceError;
    ///
    /// let error = ResourceError::Http(HttpError::Response(HttpResponseError {
    ///     code: 404,
    ///     message: String::new(),
    /// }));
    /// assert_eq!(error.status(), Some(404));
    /// ```
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Config(_) | Self::Validation(_) | Self::Decode(_) => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
