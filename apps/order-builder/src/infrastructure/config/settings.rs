//! Builder Configuration Settings
//!
//! Loaded from environment variables (after `.env` is applied).
//!
//! - `ORDER_BUILDER_PRETTY`: Pretty-print request JSON (default: true)
//! - `ORDER_BUILDER_TIME_IN_FORCE`: Comma-separated time-in-force values to
//!   allow; intersected with each order type's own set (default: no restriction)

use crate::application::{FieldModule, OrderRequestBuilder};
use crate::domain::order_request::{OrderType, TimeInForce};

const PRETTY_VAR: &str = "ORDER_BUILDER_PRETTY";
const TIME_IN_FORCE_VAR: &str = "ORDER_BUILDER_TIME_IN_FORCE";

/// Settings for the command-line builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSettings {
    /// Pretty-print the request JSON.
    pub pretty: bool,
    /// Time-in-force values to allow; `None` keeps each order type's set.
    pub time_in_force: Option<Vec<TimeInForce>>,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            pretty: true,
            time_in_force: None,
        }
    }
}

impl BuilderSettings {
    /// Load settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let pretty = match lookup(PRETTY_VAR) {
            Some(value) => parse_bool(PRETTY_VAR, &value)?,
            None => defaults.pretty,
        };

        let time_in_force = lookup(TIME_IN_FORCE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                value
                    .split(',')
                    .map(|item| {
                        item.trim()
                            .to_uppercase()
                            .parse::<TimeInForce>()
                            .map_err(|e| ConfigError::InvalidValue {
                                key: TIME_IN_FORCE_VAR.to_string(),
                                message: e.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            pretty,
            time_in_force,
        })
    }

    /// Apply the configured time-in-force restriction to `module`.
    #[must_use]
    pub fn apply(&self, module: FieldModule) -> FieldModule {
        match (module, &self.time_in_force) {
            (FieldModule::TimeInForce { choices }, Some(allowed)) => {
                FieldModule::time_in_force_of(choices.into_iter().filter(|c| allowed.contains(c)))
            }
            (module, _) => module,
        }
    }

    /// Builder for `order_type` with these settings applied.
    #[must_use]
    pub fn builder_for(&self, order_type: OrderType) -> OrderRequestBuilder {
        OrderRequestBuilder::for_order_type_with(order_type, |module| self.apply(module))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Variable is set to a value that cannot be used.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// What was wrong with it.
        message: String,
    },
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = BuilderSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, BuilderSettings::default());
    }

    #[test]
    fn parses_pretty_flag() {
        let settings = BuilderSettings::from_lookup(lookup(&[(PRETTY_VAR, "false")])).unwrap();
        assert!(!settings.pretty);

        assert!(BuilderSettings::from_lookup(lookup(&[(PRETTY_VAR, "maybe")])).is_err());
    }

    #[test]
    fn parses_time_in_force_list() {
        let settings =
            BuilderSettings::from_lookup(lookup(&[(TIME_IN_FORCE_VAR, "gtc, GTD")])).unwrap();
        assert_eq!(
            settings.time_in_force,
            Some(vec![TimeInForce::Gtc, TimeInForce::Gtd])
        );
    }

    #[test]
    fn rejects_unknown_time_in_force() {
        let err = BuilderSettings::from_lookup(lookup(&[(TIME_IN_FORCE_VAR, "GTC,DAY")]))
            .unwrap_err();
        assert!(err.to_string().contains(TIME_IN_FORCE_VAR));
    }

    #[test]
    fn restriction_intersects_order_type_choices() {
        let settings = BuilderSettings {
            pretty: true,
            time_in_force: Some(vec![TimeInForce::Ioc, TimeInForce::Gtc]),
        };

        let builder = settings.builder_for(OrderType::Market);
        let restricted = builder
            .modules()
            .find(|m| matches!(m, FieldModule::TimeInForce { .. }))
            .cloned()
            .unwrap();

        assert_eq!(restricted, FieldModule::time_in_force_of([TimeInForce::Ioc]));
    }

    #[test]
    fn unrestricted_settings_match_preset() {
        let builder = BuilderSettings::default().builder_for(OrderType::Stop);
        let preset = OrderRequestBuilder::for_order_type(OrderType::Stop);
        assert!(builder.modules().eq(preset.modules()));
    }

    #[test]
    fn other_modules_untouched() {
        let settings = BuilderSettings {
            pretty: true,
            time_in_force: Some(vec![]),
        };
        assert_eq!(settings.apply(FieldModule::Units), FieldModule::Units);
    }
}
