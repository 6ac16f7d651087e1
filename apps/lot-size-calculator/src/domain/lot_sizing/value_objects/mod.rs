//! Lot sizing value objects.

mod lot_size;
mod parameters;
mod pip_convention;
mod pip_distance;

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::LotSizingError;

pub use lot_size::{LotSize, MIN_LOT_SIZE};
pub use parameters::{LotSizeCalculation, LotSizeParameters};
pub use pip_convention::PipConvention;
pub use pip_distance::PipDistance;

/// Parse a numeric field from user-supplied text.
///
/// Surrounding whitespace is ignored. Plain (`"1.1050"`) and scientific
/// (`"1e4"`) notation are accepted. Finite numbers outside the decimal range
/// (`|x| > Decimal::MAX`, about 7.9e28) are reported as
/// [`LotSizingError::OutOfRange`], not as invalid numbers.
pub fn parse_decimal(field: &str, text: Option<&str>) -> Result<Decimal, LotSizingError> {
    let trimmed = text.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(LotSizingError::MissingField {
            field: field.to_string(),
        });
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            let is_finite_number = trimmed.parse::<f64>().is_ok_and(f64::is_finite);
            if is_finite_number {
                LotSizingError::OutOfRange {
                    field: field.to_string(),
                    value: trimmed.to_string(),
                }
            } else {
                LotSizingError::InvalidNumber {
                    field: field.to_string(),
                    value: trimmed.to_string(),
                }
            }
        })
}

/// Render with exactly two decimal places.
pub(crate) fn format_two_places(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case("1.1050", dec!(1.1050) ; "plain")]
    #[test_case("  2000.5 ", dec!(2000.5) ; "whitespace")]
    #[test_case("-3", dec!(-3) ; "negative")]
    #[test_case("1e4", dec!(10000) ; "scientific")]
    #[test_case("0.01", dec!(0.01) ; "small")]
    fn parses(text: &str, expected: Decimal) {
        assert_eq!(parse_decimal("entryPrice", Some(text)).unwrap(), expected);
    }

    #[test_case(None ; "absent")]
    #[test_case(Some("") ; "empty")]
    #[test_case(Some("   ") ; "blank")]
    fn missing(text: Option<&str>) {
        let err = parse_decimal("accountBalance", text).unwrap_err();
        assert_eq!(
            err,
            LotSizingError::MissingField {
                field: "accountBalance".to_string()
            }
        );
    }

    #[test_case("abc" ; "letters")]
    #[test_case("1.2.3" ; "two dots")]
    #[test_case("NaN" ; "nan")]
    #[test_case("12abc" ; "trailing garbage")]
    fn invalid(text: &str) {
        let err = parse_decimal("stopLossPrice", Some(text)).unwrap_err();
        assert!(matches!(err, LotSizingError::InvalidNumber { ref field, .. } if field == "stopLossPrice"));
    }

    #[test_case("1e29" ; "scientific above max")]
    #[test_case("100000000000000000000000000000" ; "plain above max")]
    #[test_case("-79228162514264337593543950336" ; "one below min")]
    #[test_case("1e300" ; "far above max")]
    fn out_of_range(text: &str) {
        let err = parse_decimal("accountBalance", Some(text)).unwrap_err();
        assert_eq!(
            err,
            LotSizingError::OutOfRange {
                field: "accountBalance".to_string(),
                value: text.to_string(),
            }
        );
    }

    #[test]
    fn decimal_max_is_accepted() {
        let parsed = parse_decimal("accountBalance", Some("79228162514264337593543950335")).unwrap();
        assert_eq!(parsed, Decimal::MAX);
    }

    #[test_case("inf" ; "infinity")]
    #[test_case("-inf" ; "negative infinity")]
    fn non_finite_is_invalid(text: &str) {
        assert!(matches!(
            parse_decimal("entryPrice", Some(text)),
            Err(LotSizingError::InvalidNumber { .. })
        ));
    }

    #[test_case(dec!(50), "50.00" ; "integer")]
    #[test_case(dec!(0.2), "0.20" ; "one place")]
    #[test_case(dec!(0), "0.00" ; "zero")]
    #[test_case(dec!(1.005), "1.01" ; "tie away from zero")]
    fn two_places(value: Decimal, expected: &str) {
        assert_eq!(format_two_places(value), expected);
    }
}
