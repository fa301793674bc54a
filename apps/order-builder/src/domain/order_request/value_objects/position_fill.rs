//! Position fill policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// How a filled order may affect open positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionFill {
    /// Venue default for the account.
    #[default]
    Default,
    /// Only open new positions.
    OpenOnly,
    /// Reduce existing positions before opening new ones.
    ReduceFirst,
    /// Only reduce existing positions.
    ReduceOnly,
}

impl PositionFill {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::OpenOnly,
        Self::ReduceFirst,
        Self::ReduceOnly,
    ];

    /// Wire string for this policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::OpenOnly => "OPEN_ONLY",
            Self::ReduceFirst => "REDUCE_FIRST",
            Self::ReduceOnly => "REDUCE_ONLY",
        }
    }
}

impl fmt::Display for PositionFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionFill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fill| fill.as_str() == s)
            .ok_or_else(|| {
                DomainError::unknown("positionFill", s, &Self::ALL.map(|fill| fill.as_str()))
            })
    }
}
