//! Order submission request.

use serde::Serialize;

use super::value_objects::{
    ClientExtensions, PositionFill, RiskAttachment, StopLossDetails, TakeProfitDetails,
    TimeInForce, TrailingStopLossDetails,
};

/// A single field written into an [`OrderRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestField {
    /// `tradeID`.
    TradeId(String),
    /// `instrument`.
    Instrument(String),
    /// `units`; negative sells, positive buys.
    Units(String),
    /// `price`.
    Price(String),
    /// `distance`.
    Distance(String),
    /// `timeInForce`.
    TimeInForce(TimeInForce),
    /// `gtdTime`, already formatted.
    GtdTime(String),
    /// `priceBound`.
    PriceBound(String),
    /// `positionFill`.
    PositionFill(PositionFill),
    /// `clientExtensions`.
    ClientExtensions(ClientExtensions),
    /// `tradeClientExtensions`.
    TradeClientExtensions(ClientExtensions),
    /// One of the `*OnFill` attachments.
    OnFill(RiskAttachment),
}

impl RequestField {
    /// Request key the field is written under.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::TradeId(_) => "tradeID",
            Self::Instrument(_) => "instrument",
            Self::Units(_) => "units",
            Self::Price(_) => "price",
            Self::Distance(_) => "distance",
            Self::TimeInForce(_) => "timeInForce",
            Self::GtdTime(_) => "gtdTime",
            Self::PriceBound(_) => "priceBound",
            Self::PositionFill(_) => "positionFill",
            Self::ClientExtensions(_) => "clientExtensions",
            Self::TradeClientExtensions(_) => "tradeClientExtensions",
            Self::OnFill(attachment) => attachment.key(),
        }
    }
}

/// Order submission request in the venue's field-naming convention.
///
/// A field is present only if its option was supplied and passed
/// validation; absent fields are skipped when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    trade_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instrument: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gtd_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position_fill: Option<PositionFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_extensions: Option<ClientExtensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trade_client_extensions: Option<ClientExtensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
}

impl OrderRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a field.
    ///
    /// Each key is written at most once per build; the builder guarantees
    /// this by ignoring repeated module activations.
    pub(crate) fn write(&mut self, field: RequestField) {
        debug_assert!(
            !self.contains(field.key()),
            "request key {} written twice",
            field.key()
        );

        match field {
            RequestField::TradeId(v) => self.trade_id = Some(v),
            RequestField::Instrument(v) => self.instrument = Some(v),
            RequestField::Units(v) => self.units = Some(v),
            RequestField::Price(v) => self.price = Some(v),
            RequestField::Distance(v) => self.distance = Some(v),
            RequestField::TimeInForce(v) => self.time_in_force = Some(v),
            RequestField::GtdTime(v) => self.gtd_time = Some(v),
            RequestField::PriceBound(v) => self.price_bound = Some(v),
            RequestField::PositionFill(v) => self.position_fill = Some(v),
            RequestField::ClientExtensions(v) => self.client_extensions = Some(v),
            RequestField::TradeClientExtensions(v) => self.trade_client_extensions = Some(v),
            RequestField::OnFill(RiskAttachment::TakeProfit(v)) => {
                self.take_profit_on_fill = Some(v);
            }
            RequestField::OnFill(RiskAttachment::StopLoss(v)) => self.stop_loss_on_fill = Some(v),
            RequestField::OnFill(RiskAttachment::TrailingStopLoss(v)) => {
                self.trailing_stop_loss_on_fill = Some(v);
            }
        }
    }

    /// Keys present in the request, in wire declaration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        [
            ("tradeID", self.trade_id.is_some()),
            ("instrument", self.instrument.is_some()),
            ("units", self.units.is_some()),
            ("price", self.price.is_some()),
            ("distance", self.distance.is_some()),
            ("timeInForce", self.time_in_force.is_some()),
            ("gtdTime", self.gtd_time.is_some()),
            ("priceBound", self.price_bound.is_some()),
            ("positionFill", self.position_fill.is_some()),
            ("clientExtensions", self.client_extensions.is_some()),
            ("tradeClientExtensions", self.trade_client_extensions.is_some()),
            ("takeProfitOnFill", self.take_profit_on_fill.is_some()),
            ("stopLossOnFill", self.stop_loss_on_fill.is_some()),
            ("trailingStopLossOnFill", self.trailing_stop_loss_on_fill.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
        .collect()
    }

    /// Returns true if `key` has been written.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }

    /// Returns true if no field has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Trade the order targets.
    #[must_use]
    pub fn trade_id(&self) -> Option<&str> {
        self.trade_id.as_deref()
    }

    /// Instrument the order is for.
    #[must_use]
    pub fn instrument(&self) -> Option<&str> {
        self.instrument.as_deref()
    }

    /// Signed order size.
    #[must_use]
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Price threshold.
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    /// Price distance.
    #[must_use]
    pub fn distance(&self) -> Option<&str> {
        self.distance.as_deref()
    }

    /// Time in force.
    #[must_use]
    pub const fn time_in_force(&self) -> Option<TimeInForce> {
        self.time_in_force
    }

    /// Good-til-date expiry in wire format.
    #[must_use]
    pub fn gtd_time(&self) -> Option<&str> {
        self.gtd_time.as_deref()
    }

    /// Worst price bound.
    #[must_use]
    pub fn price_bound(&self) -> Option<&str> {
        self.price_bound.as_deref()
    }

    /// Position fill policy.
    #[must_use]
    pub const fn position_fill(&self) -> Option<PositionFill> {
        self.position_fill
    }

    /// Client extensions for the order.
    #[must_use]
    pub const fn client_extensions(&self) -> Option<&ClientExtensions> {
        self.client_extensions.as_ref()
    }

    /// Client extensions for a trade opened by the order.
    #[must_use]
    pub const fn trade_client_extensions(&self) -> Option<&ClientExtensions> {
        self.trade_client_extensions.as_ref()
    }

    /// Take profit created on fill.
    #[must_use]
    pub const fn take_profit_on_fill(&self) -> Option<&TakeProfitDetails> {
        self.take_profit_on_fill.as_ref()
    }

    /// Stop loss created on fill.
    #[must_use]
    pub const fn stop_loss_on_fill(&self) -> Option<&StopLossDetails> {
        self.stop_loss_on_fill.as_ref()
    }

    /// Trailing stop loss created on fill.
    #[must_use]
    pub const fn trailing_stop_loss_on_fill(&self) -> Option<&TrailingStopLossDetails> {
        self.trailing_stop_loss_on_fill.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_serializes_to_empty_object() {
        let request = OrderRequest::new();
        assert!(request.is_empty());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({})
        );
    }

    #[test]
    fn trade_id_uses_venue_casing() {
        let mut request = OrderRequest::new();
        request.write(RequestField::TradeId("42".into()));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "tradeID": "42" })
        );
    }

    #[test]
    fn written_fields_serialize_camel_case() {
        let mut request = OrderRequest::new();
        request.write(RequestField::TimeInForce(TimeInForce::Gtd));
        request.write(RequestField::GtdTime("2026-01-02T03:04:05.000000000Z".into()));
        request.write(RequestField::PositionFill(PositionFill::ReduceOnly));
        request.write(RequestField::OnFill(RiskAttachment::stop_loss("1.2345")));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "timeInForce": "GTD",
                "gtdTime": "2026-01-02T03:04:05.000000000Z",
                "positionFill": "REDUCE_ONLY",
                "stopLossOnFill": { "price": "1.2345" },
            })
        );
    }

    #[test]
    fn keys_track_written_fields() {
        let mut request = OrderRequest::new();
        request.write(RequestField::Instrument("EUR_USD".into()));
        request.write(RequestField::Units("-100".into()));
        request.write(RequestField::OnFill(RiskAttachment::trailing_stop_loss("0.01")));

        assert_eq!(
            request.keys(),
            vec!["instrument", "units", "trailingStopLossOnFill"]
        );
        assert!(request.contains("units"));
        assert!(!request.contains("price"));
        assert_eq!(request.units(), Some("-100"));
    }

    #[test]
    fn field_key_matches_serialized_key() {
        let field = RequestField::TradeClientExtensions(
            ClientExtensions::from_parts(Some("t".into()), None, None).unwrap(),
        );
        assert_eq!(field.key(), "tradeClientExtensions");

        let mut request = OrderRequest::new();
        request.write(field);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tradeClientExtensions").is_some());
    }
}
