//! Single-option fields passed through to the request.

use tracing::debug;

use crate::domain::{DomainError, ValidationError};
use crate::domain::options::{OptionDescriptor, RawInput, ValueKind, names};
use crate::domain::order_request::{OrderRequest, PositionFill, RequestField};

pub(super) fn trade_id() -> OptionDescriptor {
    OptionDescriptor::new(names::TRADE_ID, "The ID of the Trade to create an Order for").required()
}

pub(super) fn instrument() -> OptionDescriptor {
    OptionDescriptor::new(names::INSTRUMENT, "The instrument to place the Order for")
        .required()
        .with_kind(ValueKind::Instrument)
}

pub(super) fn units() -> OptionDescriptor {
    OptionDescriptor::new(
        names::UNITS,
        "The number of units for the Order. Negative values indicate sell, positive values indicate buy",
    )
    .required()
}

pub(super) fn price() -> OptionDescriptor {
    OptionDescriptor::new(names::PRICE, "The price threshold for the Order").required()
}

pub(super) fn distance() -> OptionDescriptor {
    OptionDescriptor::new(names::DISTANCE, "The price distance for the Order").required()
}

pub(super) fn price_bound() -> OptionDescriptor {
    OptionDescriptor::new(
        names::PRICE_BOUND,
        "The worst price bound allowed for the Order",
    )
}

pub(super) fn position_fill() -> OptionDescriptor {
    OptionDescriptor::new(
        names::POSITION_FILL,
        "Specification of how the Order may affect open positions",
    )
    .with_choices(PositionFill::ALL.map(|fill| fill.as_str()))
}

/// Copy a text option verbatim into the request.
fn pass_through(
    input: &RawInput,
    option: &'static str,
    request: &mut OrderRequest,
    field: fn(String) -> RequestField,
) -> Result<(), ValidationError> {
    let Some(value) = input.text(option)? else {
        return Ok(());
    };

    let field = field(value.to_string());
    debug!(option, key = field.key(), "Extracted field");
    request.write(field);
    Ok(())
}

// A leading '@' is not treated as a client trade ID marker; the value is
// always written as `tradeID`.
pub(super) fn extract_trade_id(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    pass_through(input, names::TRADE_ID, request, RequestField::TradeId)
}

pub(super) fn extract_instrument(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    pass_through(input, names::INSTRUMENT, request, RequestField::Instrument)
}

pub(super) fn extract_units(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    pass_through(input, names::UNITS, request, RequestField::Units)
}

pub(super) fn extract_price(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    pass_through(input, names::PRICE, request, RequestField::Price)
}

pub(super) fn extract_distance(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    pass_through(input, names::DISTANCE, request, RequestField::Distance)
}

pub(super) fn extract_price_bound(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    pass_through(input, names::PRICE_BOUND, request, RequestField::PriceBound)
}

pub(super) fn extract_position_fill(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    let Some(value) = input.text(names::POSITION_FILL)? else {
        return Ok(());
    };

    let fill: PositionFill = value
        .parse()
        .map_err(|e: DomainError| ValidationError::new(names::POSITION_FILL, e.to_string()))?;

    debug!(position_fill = %fill, "Extracted field");
    request.write(RequestField::PositionFill(fill));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_pass_through_verbatim() {
        let input = RawInput::new().with_text(names::UNITS, "-1e3");
        let mut request = OrderRequest::new();
        extract_units(&input, &mut request).unwrap();
        assert_eq!(request.units(), Some("-1e3"));
    }

    #[test]
    fn trade_id_at_prefix_is_kept_verbatim() {
        let input = RawInput::new().with_text(names::TRADE_ID, "@my-trade");
        let mut request = OrderRequest::new();
        extract_trade_id(&input, &mut request).unwrap();
        assert_eq!(request.trade_id(), Some("@my-trade"));
        assert_eq!(request.keys(), vec!["tradeID"]);
    }

    #[test]
    fn position_fill_parsed() {
        let input = RawInput::new().with_text(names::POSITION_FILL, "OPEN_ONLY");
        let mut request = OrderRequest::new();
        extract_position_fill(&input, &mut request).unwrap();
        assert_eq!(request.position_fill(), Some(PositionFill::OpenOnly));
    }

    #[test]
    fn position_fill_outside_choices_rejected() {
        let input = RawInput::new().with_text(names::POSITION_FILL, "CLOSE_ALL");
        let mut request = OrderRequest::new();
        let err = extract_position_fill(&input, &mut request).unwrap_err();
        assert_eq!(err.option(), names::POSITION_FILL);
    }

    #[test]
    fn required_flags_follow_field() {
        assert!(instrument().required);
        assert!(units().required);
        assert!(!price_bound().required);
        assert!(!position_fill().required);
        assert_eq!(position_fill().choices.unwrap().len(), 4);
    }
}
