//! Client extensions for orders and for trades opened by them.

use tracing::debug;

use crate::domain::ValidationError;
use crate::domain::options::{OptionDescriptor, RawInput, names};
use crate::domain::order_request::{ClientExtensions, OrderRequest, RequestField};

/// The id/tag/comment option triple behind one extensions object.
pub(super) struct ExtensionGroup {
    options: [(&'static str, &'static str); 3],
    field: fn(ClientExtensions) -> RequestField,
}

pub(super) const ORDER: ExtensionGroup = ExtensionGroup {
    options: [
        (
            names::CLIENT_ORDER_ID,
            "The client-provided ID to assign to the Order",
        ),
        (
            names::CLIENT_ORDER_TAG,
            "The client-provided tag to assign to the Order",
        ),
        (
            names::CLIENT_ORDER_COMMENT,
            "The client-provided comment to assign to the Order",
        ),
    ],
    field: RequestField::ClientExtensions,
};

pub(super) const TRADE: ExtensionGroup = ExtensionGroup {
    options: [
        (
            names::CLIENT_TRADE_ID,
            "The client-provided ID to assign a Trade opened by the Order",
        ),
        (
            names::CLIENT_TRADE_TAG,
            "The client-provided tag to assign to a Trade opened by the Order",
        ),
        (
            names::CLIENT_TRADE_COMMENT,
            "The client-provided comment to assign to a Trade opened by the Order",
        ),
    ],
    field: RequestField::TradeClientExtensions,
};

impl ExtensionGroup {
    pub(super) fn descriptors(&self) -> Vec<OptionDescriptor> {
        self.options
            .iter()
            .map(|&(name, help)| OptionDescriptor::new(name, help))
            .collect()
    }

    pub(super) fn extract(
        &self,
        input: &RawInput,
        request: &mut OrderRequest,
    ) -> Result<(), ValidationError> {
        let [id, tag, comment] = self.options.map(|(name, _)| name);

        let Some(extensions) = ClientExtensions::from_parts(
            input.text(id)?.map(str::to_string),
            input.text(tag)?.map(str::to_string),
            input.text(comment)?.map(str::to_string),
        ) else {
            return Ok(());
        };

        let field = (self.field)(extensions);
        debug!(key = field.key(), "Extracted field");
        request.write(field);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_extensions_from_id_only() {
        let input = RawInput::new().with_text(names::CLIENT_ORDER_ID, "abc");
        let mut request = OrderRequest::new();

        ORDER.extract(&input, &mut request).unwrap();

        let ext = request.client_extensions().unwrap();
        assert_eq!(ext.id(), Some("abc"));
        assert_eq!(ext.tag(), None);
        assert_eq!(ext.comment(), None);
        assert!(request.trade_client_extensions().is_none());
    }

    #[test]
    fn trade_extensions_use_trade_options_only() {
        let input = RawInput::new()
            .with_text(names::CLIENT_ORDER_TAG, "order-tag")
            .with_text(names::CLIENT_TRADE_COMMENT, "swing");
        let mut request = OrderRequest::new();

        TRADE.extract(&input, &mut request).unwrap();

        let ext = request.trade_client_extensions().unwrap();
        assert_eq!(ext.comment(), Some("swing"));
        assert_eq!(ext.tag(), None);
        assert_eq!(request.keys(), vec!["tradeClientExtensions"]);
    }

    #[test]
    fn no_extension_options_writes_nothing() {
        let input = RawInput::new().with_text(names::UNITS, "5");
        let mut request = OrderRequest::new();

        TRADE.extract(&input, &mut request).unwrap();
        ORDER.extract(&input, &mut request).unwrap();

        assert!(request.is_empty());
    }
}
