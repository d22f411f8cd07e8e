//! HTTP-specific error types for the MailerLite client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: the API answered with a status of 400 or more
//! - [`InvalidHttpRequestError`]: the request was rejected before sending
//! - [`HttpError`]: unified error type for everything that can go wrong in
//!   [`HttpClient::request`](crate::clients::HttpClient::request)
//!
//! A missing resource is not a distinct kind: it is an [`HttpResponseError`]
//! whose `code` is 404.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::clients::{HttpClient, HttpError, HttpMethod};
//!
//! match client.request(HttpMethod::Get, "groups/1", None) {
//!     Ok(response) => println!("Success: {:?}", response.body()),
//!     Err(HttpError::Response(e)) if e.code == 404 => println!("No such group"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a status code of 400 or more.
///
/// `message` holds the raw response body for diagnostics.
///
/// # Example
///
/// ```rust
/// use mailerlite::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":{"code":123,"message":"Not found"}}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("MailerLite API returned status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

impl HttpResponseError {
    /// Returns `true` if the remote answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is not one of the supported methods.
    #[error("Incorrect request method '{method}'. Method should be one of: GET, POST, PUT, PATCH, DELETE.")]
    InvalidMethod {
        /// The invalid method that was provided.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (status 400 or more).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, propagated from the transport unchanged.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The 2xx response body is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the remote status code, if the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Decode(_) => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
