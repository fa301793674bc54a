//! Risk attachments created against a trade opened by the parent order.

use serde::{Deserialize, Serialize};

/// Take profit to create when the order fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeProfitDetails {
    /// Price threshold, verbatim.
    pub price: String,
}

/// Stop loss to create when the order fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopLossDetails {
    /// Price threshold, verbatim.
    pub price: String,
}

/// Trailing stop loss to create when the order fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailingStopLossDetails {
    /// Price distance, verbatim.
    pub distance: String,
}

/// A conditional order attached to a trade opened by the parent order.
///
/// Each variant lands under its own request key, so all three may be present
/// at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskAttachment {
    /// `takeProfitOnFill`.
    TakeProfit(TakeProfitDetails),
    /// `stopLossOnFill`.
    StopLoss(StopLossDetails),
    /// `trailingStopLossOnFill`.
    TrailingStopLoss(TrailingStopLossDetails),
}

impl RiskAttachment {
    /// Take profit at `price`.
    #[must_use]
    pub fn take_profit(price: impl Into<String>) -> Self {
        Self::TakeProfit(TakeProfitDetails {
            price: price.into(),
        })
    }

    /// Stop loss at `price`.
    #[must_use]
    pub fn stop_loss(price: impl Into<String>) -> Self {
        Self::StopLoss(StopLossDetails {
            price: price.into(),
        })
    }

    /// Trailing stop loss at `distance`.
    #[must_use]
    pub fn trailing_stop_loss(distance: impl Into<String>) -> Self {
        Self::TrailingStopLoss(TrailingStopLossDetails {
            distance: distance.into(),
        })
    }

    /// Request key this attachment is written under.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::TakeProfit(_) => "takeProfitOnFill",
            Self::StopLoss(_) => "stopLossOnFill",
            Self::TrailingStopLoss(_) => "trailingStopLossOnFill",
        }
    }
}
