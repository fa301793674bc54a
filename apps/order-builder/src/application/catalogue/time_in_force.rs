//! Time in force, with its good-til-date expiry.

use tracing::debug;

use crate::domain::options::{OptionDescriptor, RawInput, ValueKind, names};
use crate::domain::order_request::{OrderRequest, RequestField, TimeInForce};
use crate::domain::{DomainError, ValidationError};

pub(super) fn descriptors(choices: &[TimeInForce]) -> Vec<OptionDescriptor> {
    let mut descriptors = vec![
        OptionDescriptor::new(
            names::TIME_IN_FORCE,
            "The time-in-force to use for the Order",
        )
        .with_choices(choices.iter().map(TimeInForce::as_str)),
    ];

    // The expiry is only declared when GTD can be chosen.
    if choices.contains(&TimeInForce::Gtd) {
        descriptors.push(
            OptionDescriptor::new(
                names::GTD_TIME,
                "The date to use when the time-in-force is GTD. Format is 'YYYY-MM-DD HH:MM:SS'",
            )
            .with_kind(ValueKind::DateTime),
        );
    }

    descriptors
}

pub(super) fn extract(
    choices: &[TimeInForce],
    input: &RawInput,
    request: &mut OrderRequest,
) -> Result<(), ValidationError> {
    let Some(value) = input.text(names::TIME_IN_FORCE)? else {
        return Ok(());
    };

    let tif: TimeInForce = value
        .parse()
        .map_err(|e: DomainError| ValidationError::new(names::TIME_IN_FORCE, e.to_string()))?;

    if !choices.contains(&tif) {
        let allowed: Vec<&str> = choices.iter().map(TimeInForce::as_str).collect();
        return Err(ValidationError::new(
            names::TIME_IN_FORCE,
            format!("{tif} is not allowed here; expected one of {}", allowed.join(", ")),
        ));
    }

    request.write(RequestField::TimeInForce(tif));

    if !tif.requires_expiry() {
        debug!(time_in_force = %tif, "Extracted field");
        return Ok(());
    }

    let Some(expiry) = input.date_time(names::GTD_TIME)? else {
        return Err(ValidationError::new(
            names::GTD_TIME,
            "must set --gtd-time \"YYYY-MM-DD HH:MM:SS\" when --time-in-force=GTD",
        ));
    };

    let gtd_time = TimeInForce::format_expiry(&expiry);
    debug!(time_in_force = %tif, gtd_time = %gtd_time, "Extracted field");
    request.write(RequestField::GtdTime(gtd_time));
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn gtd_time_declared_only_with_gtd_choice() {
        assert_eq!(descriptors(&TimeInForce::ALL).len(), 2);
        assert_eq!(
            descriptors(&[TimeInForce::Fok, TimeInForce::Ioc]).len(),
            1
        );
    }

    #[test]
    fn non_gtd_ignores_gtd_time() {
        let when = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let input = RawInput::new()
            .with_text(names::TIME_IN_FORCE, "GTC")
            .with_date_time(names::GTD_TIME, when);
        let mut request = OrderRequest::new();

        extract(&TimeInForce::ALL, &input, &mut request).unwrap();

        assert_eq!(request.time_in_force(), Some(TimeInForce::Gtc));
        assert!(request.gtd_time().is_none());
    }

    #[test]
    fn gtd_without_time_fails() {
        let input = RawInput::new().with_text(names::TIME_IN_FORCE, "GTD");
        let mut request = OrderRequest::new();

        let err = extract(&TimeInForce::ALL, &input, &mut request).unwrap_err();

        assert_eq!(err.option(), names::GTD_TIME);
        assert!(err.message().contains("--time-in-force=GTD"));
    }

    #[test]
    fn gtd_with_time_is_formatted() {
        let when = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        let input = RawInput::new()
            .with_text(names::TIME_IN_FORCE, "GTD")
            .with_date_time(names::GTD_TIME, when);
        let mut request = OrderRequest::new();

        extract(&TimeInForce::ALL, &input, &mut request).unwrap();

        assert_eq!(request.gtd_time(), Some("2026-12-31T23:59:59.000000000Z"));
    }

    #[test]
    fn value_outside_choices_rejected() {
        let input = RawInput::new().with_text(names::TIME_IN_FORCE, "GTC");
        let mut request = OrderRequest::new();

        let err = extract(&[TimeInForce::Fok, TimeInForce::Ioc], &input, &mut request)
            .unwrap_err();

        assert_eq!(err.option(), names::TIME_IN_FORCE);
        assert!(err.message().contains("FOK, IOC"));
    }
}
