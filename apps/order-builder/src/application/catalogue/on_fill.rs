//! Risk attachments created when the order fills.

use tracing::debug;

use crate::domain::ValidationError;
use crate::domain::options::{OptionDescriptor, RawInput, names};
use crate::domain::order_request::{OrderRequest, RequestField, RiskAttachment};

pub(super) fn take_profit() -> OptionDescriptor {
    OptionDescriptor::new(
        names::TAKE_PROFIT_PRICE,
        "The price of the Take Profit to add to a Trade opened by this Order",
    )
}

pub(super) fn stop_loss() -> OptionDescriptor {
    OptionDescriptor::new(
        names::STOP_LOSS_PRICE,
        "The price of the Stop Loss to add to a Trade opened by this Order",
    )
}

pub(super) fn trailing_stop_loss() -> OptionDescriptor {
    OptionDescriptor::new(
        names::TRAILING_STOP_LOSS_DISTANCE,
        "The price distance for the Trailing Stop Loss to add to a Trade opened by this Order",
    )
}

fn attach(
    input: &RawInput,
    option: &'static str,
    request: &mut OrderRequest,
    build: fn(String) -> RiskAttachment,
) -> Result<(), ValidationError> {
    let Some(value) = input.text(option)? else {
        return Ok(());
    };

    let attachment = build(value.to_string());
    debug!(option, key = attachment.key(), "Attached on-fill order");
    request.write(RequestField::OnFill(attachment));
    Ok(())
}

pub(super) fn extract_take_profit(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    attach(input, names::TAKE_PROFIT_PRICE, request, RiskAttachment::take_profit)
}

pub(super) fn extract_stop_loss(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    attach(input, names::STOP_LOSS_PRICE, request, RiskAttachment::stop_loss)
}

pub(super) fn extract_trailing_stop_loss(
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    attach(
        input,
        names::TRAILING_STOP_LOSS_DISTANCE,
        request,
        RiskAttachment::trailing_stop_loss,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_loss_alone() {
        let input = RawInput::new().with_text(names::STOP_LOSS_PRICE, "1.2345");
        let mut request = OrderRequest::new();

        extract_take_profit(&input, &mut request).unwrap();
        extract_stop_loss(&input, &mut request).unwrap();
        extract_trailing_stop_loss(&input, &mut request).unwrap();

        assert_eq!(request.keys(), vec!["stopLossOnFill"]);
        assert_eq!(request.stop_loss_on_fill().unwrap().price, "1.2345");
    }

    #[test]
    fn trailing_stop_reads_its_own_distance() {
        let input = RawInput::new()
            .with_text(names::DISTANCE, "0.5")
            .with_text(names::TRAILING_STOP_LOSS_DISTANCE, "0.0050");
        let mut request = OrderRequest::new();

        extract_trailing_stop_loss(&input, &mut request).unwrap();

        assert_eq!(
            request.trailing_stop_loss_on_fill().unwrap().distance,
            "0.0050"
        );
    }
}
