//! Configuration Module
//!
//! Settings for the command-line builder, loaded from environment variables.

mod settings;

pub use settings::{BuilderSettings, ConfigError};
