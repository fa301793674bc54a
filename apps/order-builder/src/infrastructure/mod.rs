//! Infrastructure Layer
//!
//! Adapters around the builder:
//!
//! - `cli`: Command-line option parsing (clap)
//! - `config`: Settings loaded from the environment
//! - `telemetry`: Tracing subscriber setup

pub mod cli;
pub mod config;
pub mod telemetry;
