//! Configuration error types for the MailerLite client.
//!
//! This module contains the errors raised synchronously before any network
//! call: invalid credentials, invalid headers, and enum arguments that the
//! API does not accept.
//!
//! # Error Handling
//!
//! All configuration constructors and enum parsers return
//! `Result<T, ConfigError>` to enable fail-fast validation. Every variant is
//! recoverable by the caller correcting its input.
//!
//! # Example
//!
//! ```rust
//! use mailerlite::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client or its arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("Empty API key. Please provide a valid MailerLite API key.")]
    EmptyApiKey,

    /// The headers mapping is absent or empty.
    #[error("Empty headers. Please provide a mapping with 'content-type' and 'x-mailerlite-apikey'.")]
    EmptyHeaders,

    /// The headers value is not a key-value mapping.
    #[error("Headers should be a dictionary (JSON object), got {found}.")]
    HeadersNotMapping {
        /// The JSON type that was provided instead.
        found: &'static str,
    },

    /// One of the two mandatory headers is missing.
    #[error("Headers must contain 'content-type' and 'x-mailerlite-apikey'. Missing: {missing:?}")]
    MissingRequiredHeaders {
        /// The names of the missing headers.
        missing: Vec<&'static str>,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute URL starting with 'http://' or 'https://'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Sort order is not ascending or descending.
    #[error("Incorrect order '{value}', please choose between ASC or DESC.")]
    InvalidOrder {
        /// The rejected value.
        value: String,
    },

    /// Campaign status is not one of the supported statuses.
    #[error("Incorrect campaign status '{value}'. Status should be one of: sent, draft, outbox.")]
    InvalidStatus {
        /// The rejected value.
        value: String,
    },

    /// Campaign type is not one of the supported types.
    #[error("Incorrect campaign type '{value}'. Type should be one of: regular, ab.")]
    InvalidCampaignType {
        /// The rejected value.
        value: String,
    },

    /// Subscriber type is not one of the supported types.
    #[error("Incorrect subscriber type '{value}'. Type should be one of: active, unsubscribed, bounced, junk, unconfirmed.")]
    InvalidSubscriberType {
        /// The rejected value.
        value: String,
    },

    /// Activity type is not one of the supported types.
    #[error("Incorrect activity type '{value}'. Type should be one of: opens, clicks, bounces, junks, unsubscribes, forwards, sendings.")]
    InvalidActivityType {
        /// The rejected value.
        value: String,
    },

    /// Field type is not one of the supported types.
    #[error("Incorrect field type '{value}'. Available values are: TEXT, NUMBER, DATE.")]
    InvalidFieldType {
        /// The rejected value.
        value: String,
    },
}
