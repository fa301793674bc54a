//! Application Layer
//!
//! Orchestrates request assembly:
//!
//! - **Catalogue**: The fixed set of field modules and their extraction rules
//! - **Builder**: Activation and ordered extraction into one request
//! - **Presets**: Field module sets per order type

pub mod builder;
pub mod catalogue;
pub mod presets;

pub use builder::OrderRequestBuilder;
pub use catalogue::FieldModule;
pub use presets::field_modules;
