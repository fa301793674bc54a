//! Option Catalogue
//!
//! Each [`FieldModule`] declares the options it needs and extracts their
//! values into the request. A module whose options are absent writes nothing.

mod extensions;
mod on_fill;
mod order_fields;
mod time_in_force;

use std::mem;

use crate::domain::ValidationError;
use crate::domain::options::{OptionDescriptor, RawInput};
use crate::domain::order_request::{OrderRequest, TimeInForce};

/// A reusable option group contributing one or more request fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldModule {
    /// `--trade-id` → `tradeID`.
    TradeId,
    /// `--instrument` → `instrument`.
    Instrument,
    /// `--units` → `units`.
    Units,
    /// `--price` → `price`.
    Price,
    /// `--distance` → `distance`.
    Distance,
    /// `--time-in-force` and `--gtd-time` → `timeInForce`, `gtdTime`.
    TimeInForce {
        /// Allowed time-in-force values.
        choices: Vec<TimeInForce>,
    },
    /// `--price-bound` → `priceBound`.
    PriceBound,
    /// `--position-fill` → `positionFill`.
    PositionFill,
    /// `--client-order-{id,tag,comment}` → `clientExtensions`.
    ClientOrderExtensions,
    /// `--client-trade-{id,tag,comment}` → `tradeClientExtensions`.
    ClientTradeExtensions,
    /// `--take-profit-price` → `takeProfitOnFill`.
    TakeProfitOnFill,
    /// `--stop-loss-price` → `stopLossOnFill`.
    StopLossOnFill,
    /// `--trailing-stop-loss-distance` → `trailingStopLossOnFill`.
    TrailingStopLossOnFill,
}

impl FieldModule {
    /// Time in force accepting every value.
    #[must_use]
    pub fn time_in_force() -> Self {
        Self::TimeInForce {
            choices: TimeInForce::ALL.to_vec(),
        }
    }

    /// Time in force accepting only `choices`.
    #[must_use]
    pub fn time_in_force_of(choices: impl IntoIterator<Item = TimeInForce>) -> Self {
        Self::TimeInForce {
            choices: choices.into_iter().collect(),
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TradeId => "trade-id",
            Self::Instrument => "instrument",
            Self::Units => "units",
            Self::Price => "price",
            Self::Distance => "distance",
            Self::TimeInForce { .. } => "time-in-force",
            Self::PriceBound => "price-bound",
            Self::PositionFill => "position-fill",
            Self::ClientOrderExtensions => "client-order-extensions",
            Self::ClientTradeExtensions => "client-trade-extensions",
            Self::TakeProfitOnFill => "take-profit-on-fill",
            Self::StopLossOnFill => "stop-loss-on-fill",
            Self::TrailingStopLossOnFill => "trailing-stop-loss-on-fill",
        }
    }

    /// Returns true if both are the same catalogue entry, ignoring
    /// configuration such as time-in-force choices.
    #[must_use]
    pub fn same_entry(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Options this module declares.
    #[must_use]
    pub fn descriptors(&self) -> Vec<OptionDescriptor> {
        match self {
            Self::TradeId => vec![order_fields::trade_id()],
            Self::Instrument => vec![order_fields::instrument()],
            Self::Units => vec![order_fields::units()],
            Self::Price => vec![order_fields::price()],
            Self::Distance => vec![order_fields::distance()],
            Self::TimeInForce { choices } => time_in_force::descriptors(choices),
            Self::PriceBound => vec![order_fields::price_bound()],
            Self::PositionFill => vec![order_fields::position_fill()],
            Self::ClientOrderExtensions => extensions::ORDER.descriptors(),
            Self::ClientTradeExtensions => extensions::TRADE.descriptors(),
            Self::TakeProfitOnFill => vec![on_fill::take_profit()],
            Self::StopLossOnFill => vec![on_fill::stop_loss()],
            Self::TrailingStopLossOnFill => vec![on_fill::trailing_stop_loss()],
        }
    }

    /// Extract this module's values from `input` into `request`.
    ///
    /// Only the builder calls this, once per activated entry, which keeps
    /// each request key written at most once.
    pub(crate) fn extract(
        &self,
        input: &RawInput,
        request: &mut OrderRequest,
    ) -> Result<(), ValidationError> {
        match self {
            Self::TradeId => order_fields::extract_trade_id(input, request),
            Self::Instrument => order_fields::extract_instrument(input, request),
            Self::Units => order_fields::extract_units(input, request),
            Self::Price => order_fields::extract_price(input, request),
            Self::Distance => order_fields::extract_distance(input, request),
            Self::TimeInForce { choices } => time_in_force::extract(choices, input, request),
            Self::PriceBound => order_fields::extract_price_bound(input, request),
            Self::PositionFill => order_fields::extract_position_fill(input, request),
            Self::ClientOrderExtensions => extensions::ORDER.extract(input, request),
            Self::ClientTradeExtensions => extensions::TRADE.extract(input, request),
            Self::TakeProfitOnFill => on_fill::extract_take_profit(input, request),
            Self::StopLossOnFill => on_fill::extract_stop_loss(input, request),
            Self::TrailingStopLossOnFill => on_fill::extract_trailing_stop_loss(input, request),
        }
    }
}
