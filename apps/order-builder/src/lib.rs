// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Order Builder - Order Submission Request Assembly
//!
//! Composes an order submission request from a fixed catalogue of reusable
//! option groups. Each order type activates only the groups relevant to it;
//! the builder extracts supplied values in activation order, checks
//! cross-field constraints, and yields a normalized request ready for an
//! order-entry API.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Request value objects and option declarations
//!   - `options`: Option descriptors, raw input
//!   - `order_request`: Request, client extensions, risk attachments
//!
//! - **Application**: Request assembly
//!   - `catalogue`: Field modules and their extraction rules
//!   - `builder`: Activation and ordered extraction
//!   - `presets`: Field modules per order type
//!
//! - **Infrastructure**: Adapters
//!   - `cli`: clap option parser
//!   - `config`: Environment settings
//!   - `telemetry`: Tracing subscriber
//!
//! # Example
//!
//! ```
//! use order_builder::{FieldModule, OrderRequestBuilder, RawInput};
//!
//! let input = RawInput::new()
//!     .with_text("instrument", "EUR_USD")
//!     .with_text("units", "-100")
//!     .with_text("stop-loss-price", "1.2345");
//!
//! let request = OrderRequestBuilder::new()
//!     .with(FieldModule::Instrument)
//!     .with(FieldModule::Units)
//!     .with(FieldModule::StopLossOnFill)
//!     .build(&input)
//!     .unwrap();
//!
//! assert_eq!(request.keys(), vec!["instrument", "units", "stopLossOnFill"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Request value objects and option declarations.
pub mod domain;

/// Application layer - Field module catalogue and request builder.
pub mod application;

/// Infrastructure layer - Option parser, settings, and telemetry.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::{FieldModule, OrderRequestBuilder, field_modules};
pub use domain::options::{OptionDescriptor, RawInput, RawValue, ValueKind, names};
pub use domain::order_request::{
    ClientExtensions, OrderRequest, OrderType, PositionFill, RequestField, RiskAttachment,
    StopLossDetails, TakeProfitDetails, TimeInForce, TrailingStopLossDetails,
};
pub use domain::{DomainError, ValidationError};
pub use infrastructure::config::{BuilderSettings, ConfigError};
