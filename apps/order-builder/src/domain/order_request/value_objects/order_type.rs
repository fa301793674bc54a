//! Order types the builder knows how to assemble.

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Order type selecting which request fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    /// Fill immediately at the current market price.
    Market,
    /// Fill at the price threshold or better.
    Limit,
    /// Fill at the price threshold or worse.
    Stop,
    /// Becomes a market order once the price threshold is touched.
    MarketIfTouched,
    /// Closes a trade at a profit threshold.
    TakeProfit,
    /// Closes a trade at a loss threshold.
    StopLoss,
    /// Closes a trade at a loss threshold that trails the market.
    TrailingStopLoss,
}

impl OrderType {
    /// Every order type, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Market,
        Self::Limit,
        Self::Stop,
        Self::MarketIfTouched,
        Self::TakeProfit,
        Self::StopLoss,
        Self::TrailingStopLoss,
    ];

    /// Wire string for this order type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
            Self::MarketIfTouched => "MARKET_IF_TOUCHED",
            Self::TakeProfit => "TAKE_PROFIT",
            Self::StopLoss => "STOP_LOSS",
            Self::TrailingStopLoss => "TRAILING_STOP_LOSS",
        }
    }

    /// Command name used on the command line (`market-if-touched`).
    #[must_use]
    pub const fn command_name(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::Stop => "stop",
            Self::MarketIfTouched => "market-if-touched",
            Self::TakeProfit => "take-profit",
            Self::StopLoss => "stop-loss",
            Self::TrailingStopLoss => "trailing-stop-loss",
        }
    }

    /// Returns true if the order targets an existing trade rather than an
    /// instrument.
    #[must_use]
    pub const fn is_dependent(&self) -> bool {
        matches!(
            self,
            Self::TakeProfit | Self::StopLoss | Self::TrailingStopLoss
        )
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = DomainError;

    /// Accepts either the wire string or the command name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s || t.command_name() == s)
            .ok_or_else(|| DomainError::unknown("orderType", s, &Self::ALL.map(|t| t.as_str())))
    }
}
