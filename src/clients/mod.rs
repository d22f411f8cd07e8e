//! HTTP client types for MailerLite API communication.
//!
//! This module provides the transport layer every resource module is built
//! on. It validates credentials, builds request paths, and interprets status
//! codes.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The blocking HTTP client for API communication
//! - [`Headers`]: Validated credential headers
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpResponse`]: A successful response, with `204` kept distinct
//! - [`build_url`]: Path and query string construction
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::clients::{build_url, Headers, HttpClient, HttpMethod};
//! use mailerlite::ApiKey;
//!
//! let headers = Headers::from_api_key(&ApiKey::new("my-key")?);
//! let client = HttpClient::new(headers, None)?;
//!
//! let path = build_url(&[&"groups"], &[("limit", &10)]);
//! let response = client.request(HttpMethod::Get, &path, None)?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call performs exactly one exchange and status codes of
//! 400 or more are returned as [`HttpError::Response`].

mod errors;
mod headers;
mod http_client;
mod http_request;
mod http_response;
mod url;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use headers::{check_headers, Headers, API_KEY_HEADER, CONTENT_TYPE_HEADER};
pub(crate) use headers::json_type_name;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::HttpMethod;
pub use http_response::HttpResponse;
pub use url::build_url;
