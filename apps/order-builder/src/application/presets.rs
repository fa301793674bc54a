//! Field module sets per order type.

use crate::domain::order_request::{OrderType, TimeInForce};

use super::catalogue::FieldModule;

/// Time in force accepted by market orders.
pub const MARKET_TIME_IN_FORCE: [TimeInForce; 2] = [TimeInForce::Fok, TimeInForce::Ioc];

/// Time in force accepted by orders that close an existing trade.
pub const DEPENDENT_TIME_IN_FORCE: [TimeInForce; 3] =
    [TimeInForce::Gtc, TimeInForce::Gfd, TimeInForce::Gtd];

/// Modules an order of `order_type` accepts, in activation order.
#[must_use]
pub fn field_modules(order_type: OrderType) -> Vec<FieldModule> {
    match order_type {
        OrderType::Market => {
            let mut modules = vec![
                FieldModule::Instrument,
                FieldModule::Units,
                FieldModule::time_in_force_of(MARKET_TIME_IN_FORCE),
                FieldModule::PriceBound,
                FieldModule::PositionFill,
            ];
            modules.extend(opening_extras());
            modules
        }
        OrderType::Limit => {
            let mut modules = vec![
                FieldModule::Instrument,
                FieldModule::Units,
                FieldModule::Price,
                FieldModule::time_in_force(),
                FieldModule::PositionFill,
            ];
            modules.extend(opening_extras());
            modules
        }
        OrderType::Stop | OrderType::MarketIfTouched => {
            let mut modules = vec![
                FieldModule::Instrument,
                FieldModule::Units,
                FieldModule::Price,
                FieldModule::PriceBound,
                FieldModule::time_in_force(),
                FieldModule::PositionFill,
            ];
            modules.extend(opening_extras());
            modules
        }
        OrderType::TakeProfit | OrderType::StopLoss => vec![
            FieldModule::TradeId,
            FieldModule::Price,
            FieldModule::time_in_force_of(DEPENDENT_TIME_IN_FORCE),
            FieldModule::ClientOrderExtensions,
        ],
        OrderType::TrailingStopLoss => vec![
            FieldModule::TradeId,
            FieldModule::Distance,
            FieldModule::time_in_force_of(DEPENDENT_TIME_IN_FORCE),
            FieldModule::ClientOrderExtensions,
        ],
    }
}

/// Extensions and risk attachments shared by orders that may open a trade.
fn opening_extras() -> [FieldModule; 5] {
    [
        FieldModule::ClientOrderExtensions,
        FieldModule::ClientTradeExtensions,
        FieldModule::TakeProfitOnFill,
        FieldModule::StopLossOnFill,
        FieldModule::TrailingStopLossOnFill,
    ]
}
