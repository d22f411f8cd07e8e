//! # MailerLite API Rust Client
//!
//! A blocking Rust client for the MailerLite v2 REST API, covering campaigns,
//! subscribers, groups, custom fields, segments, webhooks and the account.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MailerLiteConfig`] and [`MailerLiteConfigBuilder`]
//! - Validated credential headers, checked before any network call
//! - One resource module per API area under [`rest::resources`]
//! - Fixed-shape records with optional fields, mapped from the JSON answers
//! - Payload validation for create and update calls
//! - A batch passthrough on [`MailerLiteApi`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mailerlite::MailerLiteApi;
//! use mailerlite::rest::{ListParams, ResourceResponse};
//!
//! let api = MailerLiteApi::new("your-api-key").unwrap();
//!
//! if let ResourceResponse::Record(groups) = api.groups().all(ListParams::default(), None, false).unwrap() {
//!     for group in groups {
//!         println!("{:?}: {:?} members", group.name, group.total);
//!     }
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use mailerlite::{ApiKey, BaseUrl, MailerLiteApi, MailerLiteConfig};
//! use std::time::Duration;
//!
//! let config = MailerLiteConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .base_url(BaseUrl::new("http://127.0.0.1:4010").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! let api = MailerLiteApi::with_config(&config).unwrap();
//! assert_eq!(api.client().base_url(), "http://127.0.0.1:4010");
//! ```
//!
//! [`MailerLiteConfig::from_env`] reads `MAILERLITE_API_KEY` and, optionally,
//! `MAILERLITE_BASE_URL`.
//!
//! ## Subscribers
//!
//! ```rust,ignore
//! use mailerlite::rest::resources::SubscriberId;
//! use serde_json::json;
//!
//! let created = api
//!     .subscribers()
//!     .create(&json!({"email": "demo@mailerlite.com", "name": "Demo"}), false)?;
//!
//! let by_email = api
//!     .subscribers()
//!     .get(&SubscriberId::from("demo@mailerlite.com"), false)?;
//!
//! // The email address cannot be changed; this fails before any request.
//! let err = api
//!     .subscribers()
//!     .update(&SubscriberId::from("demo@mailerlite.com"), &json!({"email": "x@y.z"}), false)
//!     .unwrap_err();
//! ```
//!
//! ## Error Handling
//!
//! Every resource operation returns [`rest::ResourceError`]:
//!
//! - `Config`: an argument was not accepted ([`ConfigError`])
//! - `Validation`: a payload was rejected ([`rest::ValidationError`])
//! - `Http`: the transport failed or the API answered 400 or more ([`clients::HttpError`])
//! - `Decode`: a response did not fit its record
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (requests at `debug`, error statuses
//! and unknown response keys at `warn`). Install a subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Headers, payloads and enum arguments are checked before sending
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One request per call**: No retries, no pagination loops

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use api::{BatchEntry, BatchRequest, MailerLiteApi};
pub use config::{ApiKey, BaseUrl, MailerLiteConfig, MailerLiteConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Headers, HttpClient, HttpError, HttpMethod, HttpResponse, HttpResponseError,
    InvalidHttpRequestError,
};

// Re-export resource types
pub use rest::{ResourceError, ResourceResponse, ValidationError};
