//! Option Declarations
//!
//! What each field module asks of the option parser, and the coerced values
//! the parser hands back.

pub mod descriptor;
pub mod raw_input;

pub use descriptor::{OptionDescriptor, ValueKind, names};
pub use raw_input::{RawInput, RawValue};
