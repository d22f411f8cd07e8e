//! MailerLite resource modules.
//!
//! Each resource struct wraps a shared [`HttpClient`](crate::clients::HttpClient)
//! and exposes the operations of one API area:
//!
//! | Resource | Path | Records |
//! |---|---|---|
//! | [`Account`] | `me`, `stats`, `settings/double_optin` | [`AccountInfo`], [`AccountStats`], [`DoubleOptin`] |
//! | [`Campaigns`] | `campaigns` | [`Campaign`], [`Stats`] |
//! | [`Subscribers`] | `subscribers` | [`Subscriber`], [`Activity`], [`SubscriberField`] |
//! | [`Groups`] | `groups` | [`Group`] |
//! | [`Fields`] | `fields` | [`Field`] |
//! | [`Segments`] | `segments` | [`SegmentPage`], [`Segment`], [`Meta`], [`Pagination`] |
//! | [`Webhooks`] | `webhooks` | [`Webhook`] |
//!
//! # Sharing a client
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mailerlite::clients::{Headers, HttpClient};
//! use mailerlite::rest::resources::{Groups, Subscribers};
//!
//! let client = Arc::new(HttpClient::new(headers, None)?);
//! let groups = Groups::from_client(Arc::clone(&client));
//! let subscribers = Subscribers::from_client(client);
//! ```

mod account;
mod campaign;
mod common;
mod field;
mod group;
mod segment;
mod subscriber;
mod webhook;

pub use account::{Account, AccountInfo, AccountStats, DoubleOptin};
pub use campaign::{Campaign, Campaigns, UNSUBSCRIBE_PLACEHOLDER, URL_PLACEHOLDER};
pub use common::{Meta, Pagination, Stats, SubscriberField};
pub use field::{Field, Fields};
pub use group::{AddSubscriberOptions, Group, Groups};
pub use segment::{Segment, SegmentPage, Segments};
pub use subscriber::{Activity, Subscriber, SubscriberId, Subscribers};
pub use webhook::{Webhook, Webhooks};

// Verify resource types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Account>();
    assert_send_sync::<Campaigns>();
    assert_send_sync::<Subscribers>();
    assert_send_sync::<Groups>();
    assert_send_sync::<Fields>();
    assert_send_sync::<Segments>();
    assert_send_sync::<Webhooks>();
};
