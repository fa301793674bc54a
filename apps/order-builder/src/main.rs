//! Order Builder Binary
//!
//! Builds an order submission request from command-line options and prints
//! it as JSON on stdout. Submission is left to the caller.
//!
//! # Usage
//!
//! ```bash
//! order-builder limit --instrument EUR_USD --units -100 --price 1.0850 \
//!     --time-in-force GTD --gtd-time "2026-12-31 17:00:00" --stop-loss-price 1.0900
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_BUILDER_PRETTY`: Pretty-print JSON (default: true)
//! - `ORDER_BUILDER_TIME_IN_FORCE`: Comma-separated time-in-force values to allow
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;
use clap::error::ErrorKind;

use order_builder::OrderType;
use order_builder::infrastructure::cli;
use order_builder::infrastructure::config::BuilderSettings;
use order_builder::infrastructure::telemetry;

fn main() -> anyhow::Result<()> {
    load_dotenv();

    telemetry::init();

    let settings = BuilderSettings::from_env()?;
    tracing::debug!(
        pretty = settings.pretty,
        time_in_force = ?settings.time_in_force,
        "Configuration loaded"
    );

    let mut command = cli::command(&settings);
    let matches = command.get_matches_mut();
    let (name, sub_matches) = matches
        .subcommand()
        .context("an order type subcommand is required")?;

    let order_type: OrderType = name.parse()?;
    let builder = settings.builder_for(order_type);

    let input = cli::raw_input(builder.descriptors(), sub_matches);
    let request = match input.and_then(|input| builder.build(&input)) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(order_type = %order_type, error = %e, "Order request rejected");
            let subcommand = command
                .find_subcommand_mut(name)
                .context("subcommand disappeared after parsing")?;
            subcommand.error(ErrorKind::ValueValidation, e).exit();
        }
    };

    let json = if settings.pretty {
        serde_json::to_string_pretty(&request)?
    } else {
        serde_json::to_string(&request)?
    };
    println!("{json}");

    Ok(())
}

/// Load `.env` from the current directory or the nearest ancestor.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
