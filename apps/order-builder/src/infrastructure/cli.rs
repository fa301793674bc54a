//! Command-Line Adapter
//!
//! Turns option descriptors into clap arguments, and clap matches back into
//! [`RawInput`]. Coercion (instrument names, date-times, enumerated choices)
//! and required-option checks happen here, before the builder runs.

use std::any::Any;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use clap::builder::PossibleValuesParser;
use clap::parser::MatchesError;
use clap::{Arg, ArgMatches, Command};
use regex::Regex;

use crate::domain::ValidationError;
use crate::domain::options::{OptionDescriptor, RawInput, RawValue, ValueKind};
use crate::domain::order_request::OrderType;
use crate::infrastructure::config::BuilderSettings;

/// Accepted `--gtd-time` layout besides RFC 3339.
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Top-level command with one subcommand per order type.
#[must_use]
pub fn command(settings: &BuilderSettings) -> Command {
    OrderType::ALL.into_iter().fold(
        Command::new("order-builder")
            .about("Build an order submission request from command-line options")
            .version(clap::crate_version!())
            .subcommand_required(true)
            .arg_required_else_help(true),
        |command, order_type| {
            let builder = settings.builder_for(order_type);
            command.subcommand(
                // Negative units sell, so `--units -100` must read as a value.
                Command::new(order_type.command_name())
                    .about(about(order_type))
                    .allow_negative_numbers(true)
                    .args(builder.descriptors().map(arg_for)),
            )
        },
    )
}

fn about(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::Market => "Create a Market Order",
        OrderType::Limit => "Create a Limit Order",
        OrderType::Stop => "Create a Stop Order",
        OrderType::MarketIfTouched => "Create a Market If Touched Order",
        OrderType::TakeProfit => "Create a Take Profit Order for an open Trade",
        OrderType::StopLoss => "Create a Stop Loss Order for an open Trade",
        OrderType::TrailingStopLoss => "Create a Trailing Stop Loss Order for an open Trade",
    }
}

/// clap argument for a descriptor (`--<name> <value>`).
#[must_use]
pub fn arg_for(descriptor: &OptionDescriptor) -> Arg {
    let arg = Arg::new(descriptor.name)
        .long(descriptor.name)
        .required(descriptor.required)
        .help(descriptor.help);

    if let Some(choices) = &descriptor.choices {
        return arg.value_parser(PossibleValuesParser::new(choices.clone()));
    }

    match descriptor.kind {
        ValueKind::Text => arg,
        ValueKind::Instrument => arg.value_parser(parse_instrument),
        ValueKind::DateTime => arg.value_parser(parse_date_time),
    }
}

/// Collect supplied values for `descriptors` from `matches`.
///
/// Options that were not supplied, or that `matches` does not know about,
/// are left absent. A value whose type disagrees with the descriptor's
/// kind is an error.
pub fn raw_input<'a>(
    descriptors: impl IntoIterator<Item = &'a OptionDescriptor>,
    matches: &ArgMatches,
) -> Result<RawInput, ValidationError> {
    let mut input = RawInput::new();

    for descriptor in descriptors {
        let name = descriptor.name;
        let value = match descriptor.kind {
            ValueKind::DateTime => {
                lookup::<DateTime<Utc>>(matches, name)?.map(|value| RawValue::DateTime(*value))
            }
            ValueKind::Text | ValueKind::Instrument => {
                lookup::<String>(matches, name)?.map(|value| RawValue::Text(value.clone()))
            }
        };

        if let Some(value) = value {
            input.insert(name, value);
        }
    }

    Ok(input)
}

fn lookup<'m, T>(matches: &'m ArgMatches, name: &str) -> Result<Option<&'m T>, ValidationError>
where
    T: Any + Clone + Send + Sync + 'static,
{
    match matches.try_get_one::<T>(name) {
        Ok(value) => Ok(value),
        Err(MatchesError::UnknownArgument { .. }) => Ok(None),
        Err(e) => Err(ValidationError::new(name, e.to_string())),
    }
}

/// Normalize an instrument name to `BASE_QUOTE` (`eur/usd` → `EUR_USD`).
#[allow(clippy::expect_used)] // Regex is compile-time constant
pub fn parse_instrument(value: &str) -> Result<String, String> {
    static INSTRUMENT_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = INSTRUMENT_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Z0-9]+_[A-Z0-9]+$").expect("instrument regex is valid")
    });

    let normalized = value.trim().replace('/', "_").to_uppercase();

    if re.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(format!("'{value}' is not an instrument name like EUR_USD"))
    }
}

/// Parse `YYYY-MM-DD HH:MM:SS` (taken as UTC) or an RFC 3339 timestamp.
pub fn parse_date_time(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT) {
        return Ok(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(value)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|_| format!("'{value}' is not a date-time; expected 'YYYY-MM-DD HH:MM:SS'"))
}
