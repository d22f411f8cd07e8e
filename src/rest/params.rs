//! Query parameters and enumerated arguments shared by the resource modules.
//!
//! Every enum parses case-insensitively with [`FromStr`] and fails with its
//! own [`ConfigError`] variant, so an unsupported value is rejected before a
//! request is built.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Pagination parameters for list operations.
///
/// # Example
///
/// ```rust
/// use mailerlite::rest::ListParams;
///
/// let params = ListParams::default();
/// assert_eq!((params.limit, params.offset), (100, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of records returned.
    pub limit: u32,
    /// Number of records skipped.
    pub offset: u32,
}

impl ListParams {
    /// Creates list parameters.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(100, 0)
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident, default = $default:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All accepted values.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the value as sent on the wire.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ConfigError::$error {
                        value: s.to_string(),
                    })
            }
        }
    };
}

wire_enum! {
    /// Sort order of list operations.
    Order, InvalidOrder, default = Asc {
        /// Ascending.
        Asc => "asc",
        /// Descending.
        Desc => "desc",
    }
}

wire_enum! {
    /// Delivery state a campaign list is filtered by.
    CampaignStatus, InvalidStatus, default = Sent {
        /// Campaigns already sent.
        Sent => "sent",
        /// Campaigns not yet completed or sent.
        Draft => "draft",
        /// Campaigns being sent right now or scheduled.
        Outbox => "outbox",
    }
}

wire_enum! {
    /// Kind of campaign to create.
    CampaignType, InvalidCampaignType, default = Regular {
        /// A single-variant campaign.
        Regular => "regular",
        /// An A/B split campaign.
        Ab => "ab",
    }
}

wire_enum! {
    /// Subscription state a subscriber list is filtered by.
    SubscriberType, InvalidSubscriberType, default = Active {
        /// Active subscribers.
        Active => "active",
        /// Subscribers who opted out.
        Unsubscribed => "unsubscribed",
        /// Subscribers whose address bounced.
        Bounced => "bounced",
        /// Subscribers marked as junk.
        Junk => "junk",
        /// Subscribers who have not confirmed.
        Unconfirmed => "unconfirmed",
    }
}

wire_enum! {
    /// Kind of subscriber activity.
    ActivityType, InvalidActivityType, default = Opens {
        /// Email opens.
        Opens => "opens",
        /// Link clicks.
        Clicks => "clicks",
        /// Bounces.
        Bounces => "bounces",
        /// Junk reports.
        Junks => "junks",
        /// Unsubscriptions.
        Unsubscribes => "unsubscribes",
        /// Forwards.
        Forwards => "forwards",
        /// Sendings.
        Sendings => "sendings",
    }
}

wire_enum! {
    /// Data type of a custom field.
    FieldType, InvalidFieldType, default = Text {
        /// Free text.
        Text => "TEXT",
        /// A number.
        Number => "NUMBER",
        /// A date.
        Date => "DATE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_parses_case_insensitively() {
        assert_eq!("ASC".parse::<Order>().unwrap(), Order::Asc);
        assert_eq!("desc".parse::<Order>().unwrap(), Order::Desc);
        assert_eq!("Desc".parse::<Order>().unwrap(), Order::Desc);
    }

    #[test]
    fn test_order_rejects_other_values() {
        for value in ["", "ascending", "up", "random"] {
            assert_eq!(
                value.parse::<Order>(),
                Err(ConfigError::InvalidOrder {
                    value: value.to_string()
                })
            );
        }
    }

    #[test]
    fn test_field_type_is_uppercase_on_the_wire() {
        let field_type: FieldType = "number".parse().unwrap();
        assert_eq!(field_type.to_string(), "NUMBER");
        assert!(matches!(
            "BOOLEAN".parse::<FieldType>(),
            Err(ConfigError::InvalidFieldType { .. })
        ));
    }

    #[test]
    fn test_each_enum_has_its_own_error() {
        assert!(matches!(
            "archived".parse::<CampaignStatus>(),
            Err(ConfigError::InvalidStatus { .. })
        ));
        assert!(matches!(
            "split".parse::<CampaignType>(),
            Err(ConfigError::InvalidCampaignType { .. })
        ));
        assert!(matches!(
            "deleted".parse::<SubscriberType>(),
            Err(ConfigError::InvalidSubscriberType { .. })
        ));
        assert!(matches!(
            "views".parse::<ActivityType>(),
            Err(ConfigError::InvalidActivityType { .. })
        ));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Order::default(), Order::Asc);
        assert_eq!(CampaignStatus::default(), CampaignStatus::Sent);
        assert_eq!(FieldType::default(), FieldType::Text);
        assert_eq!(ListParams::default(), ListParams::new(100, 0));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for activity in ActivityType::ALL {
            assert_eq!(activity.to_string().parse::<ActivityType>().unwrap(), *activity);
        }
    }
}
