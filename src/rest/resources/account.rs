//! Account resource implementation.
//!
//! Reads the account profile, its sending statistics, and the double opt-in
//! setting.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailerlite::rest::resources::Account;
//!
//! let account = Account::new(headers)?;
//! if let Some(info) = account.info(false)?.into_record() {
//!     println!("Signed in as {:?}", info.email);
//! }
//! account.set_double_optin(true)?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{build_url, HttpClient};
use crate::rest::{Record, ResourceError, ResourceResponse};

use super::common::{resource_constructors, take_key};

/// The account profile returned by `GET me`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountInfo {
    /// The account identifier.
    pub id: Option<u64>,
    /// The account time zone, as returned by the API.
    pub timezone: Option<Value>,
    /// The account name.
    pub name: Option<String>,
    /// The account subdomain.
    pub subdomain: Option<String>,
    /// The account owner's email address.
    pub email: Option<String>,
    /// The default sender address.
    pub from: Option<String>,
    /// Creation timestamp.
    pub date_created: Option<String>,
    /// Last update timestamp.
    pub date_updated: Option<String>,
}

impl Record for AccountInfo {
    const NAME: &'static str = "AccountInfo";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "timezone",
        "name",
        "subdomain",
        "email",
        "from",
        "date_created",
        "date_updated",
    ];
}

/// Account-wide sending statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountStats {
    /// Number of active subscribers.
    pub subscribed: Option<u64>,
    /// Number of unsubscribed subscribers.
    pub unsubscribed: Option<u64>,
    /// Number of campaigns sent.
    pub campaigns: Option<u64>,
    /// Number of emails sent.
    pub sent_emails: Option<u64>,
    /// Account open rate, between 0 and 1.
    pub open_rate: Option<f64>,
    /// Account click rate, between 0 and 1.
    pub click_rate: Option<f64>,
    /// Account bounce rate, between 0 and 1.
    pub bounce_rate: Option<f64>,
}

impl Record for AccountStats {
    const NAME: &'static str = "AccountStats";
    const FIELDS: &'static [&'static str] = &[
        "subscribed",
        "unsubscribed",
        "campaigns",
        "sent_emails",
        "open_rate",
        "click_rate",
        "bounce_rate",
    ];
}

/// The double opt-in setting of the account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoubleOptin {
    /// Whether new subscribers must confirm their address.
    pub enabled: Option<bool>,
}

impl Record for DoubleOptin {
    const NAME: &'static str = "DoubleOptin";
    const FIELDS: &'static [&'static str] = &["enabled"];
}

/// Account operations.
#[derive(Debug, Clone)]
pub struct Account {
    client: Arc<HttpClient>,
}

resource_constructors!(Account);

impl Account {
    /// Returns the account profile.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure and
    /// [`ResourceError::Decode`] when the profile cannot be mapped.
    pub fn info(&self, as_json: bool) -> Result<ResourceResponse<AccountInfo>, ResourceError> {
        let response = self.client.get(&build_url(&[&"me"], &[]))?;
        ResourceResponse::from_http(response, as_json, |body| {
            AccountInfo::from_json(take_key(body, "account"))
        })
    }

    /// Returns the account statistics.
    ///
    /// # Errors
    ///
    /// See [`info`](Self::info).
    pub fn stats(&self, as_json: bool) -> Result<ResourceResponse<AccountStats>, ResourceError> {
        let response = self.client.get(&build_url(&[&"stats"], &[]))?;
        ResourceResponse::from_http(response, as_json, AccountStats::from_json)
    }

    /// Returns the double opt-in setting.
    ///
    /// # Errors
    ///
    /// See [`info`](Self::info).
    pub fn double_optin(&self, as_json: bool) -> Result<ResourceResponse<DoubleOptin>, ResourceError> {
        let response = self.client.get(&build_url(&[&"settings", &"double_optin"], &[]))?;
        ResourceResponse::from_http(response, as_json, DoubleOptin::from_json)
    }

    /// Enables or disables double opt-in and returns the API answer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or remote failure.
    pub fn set_double_optin(&self, enable: bool) -> Result<Value, ResourceError> {
        let path = build_url(&[&"settings", &"double_optin"], &[]);
        let response = self.client.post(&path, Some(&json!({ "enable": enable })))?;
        Ok(response.into_body())
    }
}
