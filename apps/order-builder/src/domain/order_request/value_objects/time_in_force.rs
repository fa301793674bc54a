//! Time in force for orders.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Wire format for good-til-date expiry times.
///
/// Sub-second precision is always rendered as nine zeros.
pub const GTD_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000000000Z";

/// Time in force specifying how long an order remains active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Fill-or-kill (all or nothing, immediate execution required).
    Fok,
    /// Immediate-or-cancel (fill immediately, cancel remainder).
    Ioc,
    /// Good-til-cancelled.
    Gtc,
    /// Good-for-day.
    Gfd,
    /// Good-til-date; requires an expiry time.
    Gtd,
}

impl TimeInForce {
    /// Every time in force, in declaration order.
    pub const ALL: [Self; 5] = [Self::Fok, Self::Ioc, Self::Gtc, Self::Gfd, Self::Gtd];

    /// Wire string for this time in force.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fok => "FOK",
            Self::Ioc => "IOC",
            Self::Gtc => "GTC",
            Self::Gfd => "GFD",
            Self::Gtd => "GTD",
        }
    }

    /// Returns true if an expiry time must accompany this time in force.
    #[must_use]
    pub const fn requires_expiry(&self) -> bool {
        matches!(self, Self::Gtd)
    }

    /// Format an expiry time the way the venue expects `gtdTime`.
    #[must_use]
    pub fn format_expiry(time: &DateTime<Utc>) -> String {
        time.format(GTD_TIME_FORMAT).to_string()
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeInForce {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tif| tif.as_str() == s)
            .ok_or_else(|| {
                DomainError::unknown(
                    "timeInForce",
                    s,
                    &Self::ALL.map(|tif| tif.as_str()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn time_in_force_requires_expiry() {
        assert!(TimeInForce::Gtd.requires_expiry());
        assert!(!TimeInForce::Gtc.requires_expiry());
        assert!(!TimeInForce::Fok.requires_expiry());
    }

    #[test]
    fn time_in_force_parse() {
        assert_eq!("GFD".parse::<TimeInForce>().unwrap(), TimeInForce::Gfd);
        assert!("gtd".parse::<TimeInForce>().is_err());
        assert!("DAY".parse::<TimeInForce>().is_err());
    }

    #[test]
    fn time_in_force_serde() {
        let json = serde_json::to_string(&TimeInForce::Ioc).unwrap();
        assert_eq!(json, "\"IOC\"");
    }

    #[test]
    fn expiry_uses_fixed_nanosecond_format() {
        let time = Utc.with_ymd_and_hms(2026, 3, 9, 17, 5, 0).unwrap();
        assert_eq!(
            TimeInForce::format_expiry(&time),
            "2026-03-09T17:05:00.000000000Z"
        );
    }

    #[test]
    fn expiry_drops_sub_second_precision() {
        let time = Utc
            .with_ymd_and_hms(2026, 3, 9, 17, 5, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(250))
            .unwrap();
        assert_eq!(
            TimeInForce::format_expiry(&time),
            "2026-03-09T17:05:00.000000000Z"
        );
    }
}
