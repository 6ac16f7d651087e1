//! Calculate Lot Size Use Case

use uuid::Uuid;

use crate::application::dto::{CalculateLotSizeRequestDto, CalculationResultDto};
use crate::domain::lot_sizing::{LotSizeCalculator, LotSizingError};

/// Use case for sizing a position from submitted form or JSON values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateLotSizeUseCase {
    calculator: LotSizeCalculator,
}

impl CalculateLotSizeUseCase {
    /// Create a new `CalculateLotSizeUseCase`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calculator: LotSizeCalculator::new(),
        }
    }

    /// Parse the request and run the calculation.
    ///
    /// # Errors
    ///
    /// Returns [`LotSizingError`] when a numeric field is missing or
    /// malformed, or the arithmetic overflows.
    pub fn execute(
        &self,
        request: &CalculateLotSizeRequestDto,
    ) -> Result<CalculationResultDto, LotSizingError> {
        let calculation_id = Uuid::new_v4();

        let result = request
            .to_parameters()
            .and_then(|params| self.calculator.calculate(&params).map(|calc| (params, calc)));

        match result {
            Ok((params, calc)) => {
                tracing::debug!(
                    %calculation_id,
                    convention = params.convention.as_str(),
                    pips = %calc.pips,
                    risk_amount = %calc.risk_amount,
                    lot_size = %calc.lot_size,
                    "Lot size calculated"
                );
                Ok(CalculationResultDto::from(&calc))
            }
            Err(e) => {
                tracing::warn!(
                    %calculation_id,
                    field = e.field().unwrap_or("-"),
                    error = %e,
                    "Lot size calculation rejected"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1.1050", "1.1000", "10000", "1", false, "0.20", "50.00" ; "eurusd")]
    #[test_case("2000.00", "1999.50", "5000", "2", true, "0.20", "50.00" ; "gold")]
    #[test_case("1.1000", "1.1000", "10000", "1", false, "0.00", "0.00" ; "zero distance")]
    #[test_case("1.1050", "1.1049", "100", "0.1", false, "0.01", "1.00" ; "exact minimum")]
    #[test_case("1.1050", "1.1049", "1", "0.01", false, "0.01", "1.00" ; "clamped minimum")]
    #[test_case(" 1.1050 ", "1.1000", "1e4", "1", false, "0.20", "50.00" ; "whitespace and exponent")]
    fn executes(
        entry: &str,
        stop: &str,
        balance: &str,
        risk: &str,
        gold: bool,
        lots: &str,
        pips: &str,
    ) {
        let request = CalculateLotSizeRequestDto::from_text(entry, stop, balance, risk, gold);
        let result = CalculateLotSizeUseCase::new().execute(&request).unwrap();

        assert_eq!(result.recommended_lot_size, lots);
        assert_eq!(result.pips_if_loose, pips);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let request = CalculateLotSizeRequestDto::from_text("abc", "1.1000", "10000", "1", false);
        let err = CalculateLotSizeUseCase::new().execute(&request).unwrap_err();

        assert_eq!(
            err,
            LotSizingError::InvalidNumber {
                field: "entryPrice".to_string(),
                value: "abc".to_string(),
            }
        );
    }

    #[test_case("1e29" ; "scientific")]
    #[test_case("100000000000000000000000000000" ; "plain")]
    #[test_case("1e300" ; "far beyond")]
    fn balance_beyond_decimal_range_is_out_of_range(balance: &str) {
        let request = CalculateLotSizeRequestDto::from_text("1.1050", "1.1000", balance, "1", false);
        let err = CalculateLotSizeUseCase::new().execute(&request).unwrap_err();

        assert_eq!(
            err,
            LotSizingError::OutOfRange {
                field: "accountBalance".to_string(),
                value: balance.to_string(),
            }
        );
    }

    #[test]
    fn largest_balance_still_sizes() {
        let request = CalculateLotSizeRequestDto::from_text(
            "1.1050",
            "1.1000",
            "79228162514264337593543950335",
            "1",
            false,
        );
        let result = CalculateLotSizeUseCase::new().execute(&request).unwrap();
        assert_eq!(result.pips_if_loose, "50.00");
    }

    #[test]
    fn risk_amount_beyond_decimal_range_overflows() {
        let request = CalculateLotSizeRequestDto::from_text("1.1050", "1.1000", "7e28", "200", false);
        let err = CalculateLotSizeUseCase::new().execute(&request).unwrap_err();

        assert_eq!(
            err,
            LotSizingError::ArithmeticOverflow {
                stage: "risk amount"
            }
        );
    }

    #[test]
    fn rejects_empty_request() {
        let err = CalculateLotSizeUseCase::new()
            .execute(&CalculateLotSizeRequestDto::default())
            .unwrap_err();

        assert!(matches!(err, LotSizingError::MissingField { .. }));
    }
}
