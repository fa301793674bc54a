//! Domain Layer
//!
//! Request value objects and option declarations, with no dependency on any
//! particular option parser or submission transport.
//!
//! - [`options`]: Option descriptors and the raw input supplied for them
//! - [`order_request`]: The order submission request and its nested objects
//! - [`errors`]: Validation and parse errors

pub mod errors;
pub mod options;
pub mod order_request;

pub use errors::{DomainError, ValidationError};
