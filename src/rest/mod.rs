//! Resource layer of the MailerLite API.
//!
//! This module provides the pieces every resource module is built from:
//!
//! - **[`Record`] trait**: mapping of JSON objects onto fixed-shape records
//! - **[`PayloadSchema`]**: required/optional key validation for request bodies
//! - **[`ResourceResponse<T>`]**: a mapped record or the unmapped JSON body
//! - **[`ListParams`]** and the enumerated arguments ([`Order`], [`CampaignStatus`], ...)
//! - **[`ResourceError`]**: the error type of every resource operation
//!
//! The resource modules themselves live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::rest::{ListParams, Order, ResourceResponse};
//! use mailerlite::rest::resources::Segments;
//!
//! let segments = Segments::new(headers)?;
//! let order: Order = "desc".parse()?;
//!
//! if let ResourceResponse::Record(page) = segments.all(ListParams::default(), order, false)? {
//!     for segment in page.data.unwrap_or_default() {
//!         println!("- {:?}", segment.title);
//!     }
//! }
//! ```

mod errors;
mod params;
mod payload;
mod record;
mod response;

pub mod resources;

pub use errors::{ResourceError, ValidationError};
pub use params::{
    ActivityType, CampaignStatus, CampaignType, FieldType, ListParams, Order, SubscriberType,
};
pub use payload::PayloadSchema;
pub use record::Record;
pub use response::{is_empty_body, ResourceResponse};

pub(crate) use payload::as_object;
