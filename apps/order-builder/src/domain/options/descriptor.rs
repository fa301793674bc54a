//! Option descriptors.

/// Option names shared by field modules and the option parser.
pub mod names {
    /// `--trade-id`
    pub const TRADE_ID: &str = "trade-id";
    /// `--instrument`
    pub const INSTRUMENT: &str = "instrument";
    /// `--units`
    pub const UNITS: &str = "units";
    /// `--price`
    pub const PRICE: &str = "price";
    /// `--distance`
    pub const DISTANCE: &str = "distance";
    /// `--time-in-force`
    pub const TIME_IN_FORCE: &str = "time-in-force";
    /// `--gtd-time`
    pub const GTD_TIME: &str = "gtd-time";
    /// `--price-bound`
    pub const PRICE_BOUND: &str = "price-bound";
    /// `--position-fill`
    pub const POSITION_FILL: &str = "position-fill";
    /// `--client-order-id`
    pub const CLIENT_ORDER_ID: &str = "client-order-id";
    /// `--client-order-tag`
    pub const CLIENT_ORDER_TAG: &str = "client-order-tag";
    /// `--client-order-comment`
    pub const CLIENT_ORDER_COMMENT: &str = "client-order-comment";
    /// `--client-trade-id`
    pub const CLIENT_TRADE_ID: &str = "client-trade-id";
    /// `--client-trade-tag`
    pub const CLIENT_TRADE_TAG: &str = "client-trade-tag";
    /// `--client-trade-comment`
    pub const CLIENT_TRADE_COMMENT: &str = "client-trade-comment";
    /// `--take-profit-price`
    pub const TAKE_PROFIT_PRICE: &str = "take-profit-price";
    /// `--stop-loss-price`
    pub const STOP_LOSS_PRICE: &str = "stop-loss-price";
    /// `--trailing-stop-loss-distance`
    pub const TRAILING_STOP_LOSS_DISTANCE: &str = "trailing-stop-loss-distance";
}

/// Coercion the option parser applies before a value reaches the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Free text, passed through verbatim.
    #[default]
    Text,
    /// Instrument name, normalized to the venue's `BASE_QUOTE` form.
    Instrument,
    /// Date and time, coerced to UTC.
    DateTime,
}

/// An external option a field module declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Option name, without leading dashes.
    pub name: &'static str,
    /// Whether the option parser must reject input that omits it.
    pub required: bool,
    /// Allowed values; `None` accepts anything.
    pub choices: Option<Vec<&'static str>>,
    /// Coercion applied by the option parser.
    pub kind: ValueKind,
    /// Help text.
    pub help: &'static str,
}

impl OptionDescriptor {
    /// Optional free-text option.
    #[must_use]
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            required: false,
            choices: None,
            kind: ValueKind::Text,
            help,
        }
    }

    /// Mark the option as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict the option to a fixed set of values.
    #[must_use]
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = &'static str>) -> Self {
        self.choices = Some(choices.into_iter().collect());
        self
    }

    /// Set the coercion applied by the option parser.
    #[must_use]
    pub const fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns true if `value` is acceptable for this option.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.choices
            .as_ref()
            .is_none_or(|choices| choices.contains(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_defaults() {
        let d = OptionDescriptor::new(names::PRICE, "The price threshold");
        assert!(!d.required);
        assert!(d.choices.is_none());
        assert_eq!(d.kind, ValueKind::Text);
        assert!(d.accepts("anything"));
    }

    #[test]
    fn descriptor_choices_restrict_values() {
        let d = OptionDescriptor::new(names::TIME_IN_FORCE, "tif").with_choices(["FOK", "IOC"]);
        assert!(d.accepts("FOK"));
        assert!(!d.accepts("GTC"));
    }

    #[test]
    fn descriptor_builder_chain() {
        let d = OptionDescriptor::new(names::INSTRUMENT, "instrument")
            .required()
            .with_kind(ValueKind::Instrument);
        assert!(d.required);
        assert_eq!(d.kind, ValueKind::Instrument);
    }
}
