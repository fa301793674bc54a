//! Order Request Value Objects
//!
//! Immutable types embedded in an order submission request.

mod client_extensions;
mod order_type;
mod position_fill;
mod risk_attachment;
mod time_in_force;

pub use client_extensions::ClientExtensions;
pub use order_type::OrderType;
pub use position_fill::PositionFill;
pub use risk_attachment::{
    RiskAttachment, StopLossDetails, TakeProfitDetails, TrailingStopLossDetails,
};
pub use time_in_force::TimeInForce;
