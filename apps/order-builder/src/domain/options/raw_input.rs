//! Raw option values supplied by the option parser.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::ValidationError;

/// A value already coerced by the option parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Text, including enumerated choices and normalized instruments.
    Text(String),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
}

/// Mapping from option name to coerced value.
///
/// An option missing from the map is absent (not supplied).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    values: HashMap<String, RawValue>,
}

impl RawInput {
    /// Create an input with no options supplied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a value for `name`, replacing any earlier one.
    pub fn insert(&mut self, name: impl Into<String>, value: RawValue) {
        self.values.insert(name.into(), value);
    }

    /// Supply a text value.
    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, RawValue::Text(value.into()));
        self
    }

    /// Supply a date-time value.
    #[must_use]
    pub fn with_date_time(mut self, name: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.insert(name, RawValue::DateTime(value));
        self
    }

    /// Returns true if `name` was supplied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Text value for `name`.
    ///
    /// Returns `Ok(None)` when absent and an error when the option parser
    /// supplied a value of another kind.
    pub fn text(&self, name: &str) -> Result<Option<&str>, ValidationError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(RawValue::Text(value)) => Ok(Some(value)),
            Some(RawValue::DateTime(_)) => Err(ValidationError::new(name, "expected text")),
        }
    }

    /// Date-time value for `name`.
    pub fn date_time(&self, name: &str) -> Result<Option<DateTime<Utc>>, ValidationError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(RawValue::DateTime(value)) => Ok(Some(*value)),
            Some(RawValue::Text(_)) => Err(ValidationError::new(name, "expected a date-time")),
        }
    }

    /// Number of supplied options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn absent_option_is_none() {
        let input = RawInput::new();
        assert!(input.text("units").unwrap().is_none());
        assert!(input.date_time("gtd-time").unwrap().is_none());
        assert!(input.is_empty());
    }

    #[test]
    fn typed_accessors() {
        let when = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let input = RawInput::new()
            .with_text("units", "-10")
            .with_date_time("gtd-time", when);

        assert_eq!(input.text("units").unwrap(), Some("-10"));
        assert_eq!(input.date_time("gtd-time").unwrap(), Some(when));
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn kind_mismatch_is_validation_error() {
        let input = RawInput::new().with_text("gtd-time", "tomorrow");
        let err = input.date_time("gtd-time").unwrap_err();
        assert_eq!(err.option(), "gtd-time");
    }

    #[test]
    fn collect_from_pairs() {
        let input: RawInput = [("price", RawValue::Text("1.1".into()))]
            .into_iter()
            .collect();
        assert!(input.contains("price"));
    }
}
