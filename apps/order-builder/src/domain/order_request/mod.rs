//! Order Request
//!
//! The normalized order submission request and the value objects nested in it.

pub mod request;
pub mod value_objects;

pub use request::{OrderRequest, RequestField};
pub use value_objects::{
    ClientExtensions, OrderType, PositionFill, RiskAttachment, StopLossDetails, TakeProfitDetails,
    TimeInForce, TrailingStopLossDetails,
};
