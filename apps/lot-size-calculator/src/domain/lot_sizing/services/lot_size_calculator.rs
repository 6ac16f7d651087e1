//! Core lot sizing logic.

use rust_decimal::Decimal;

use crate::domain::lot_sizing::LotSizingError;
use crate::domain::lot_sizing::value_objects::{
    LotSize, LotSizeCalculation, LotSizeParameters, PipDistance,
};

/// Account-currency value of one pip on one standard lot (100,000 units).
pub const PIP_VALUE_PER_STANDARD_LOT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Stateless calculator turning risk parameters into a lot size.
///
/// Pure: no I/O, no logging, no shared state. Safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LotSizeCalculator;

impl LotSizeCalculator {
    /// Create a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Calculate the recommended lot size and pips at risk.
    ///
    /// # Errors
    ///
    /// Returns [`LotSizingError::ArithmeticOverflow`] when an intermediate
    /// value leaves the decimal range.
    pub fn calculate(
        &self,
        params: &LotSizeParameters,
    ) -> Result<LotSizeCalculation, LotSizingError> {
        let pips = PipDistance::between(params.entry_price, params.stop_loss_price, params.convention)?;
        let risk_amount = Self::risk_amount(params.account_balance, params.risk_percent)?;

        // Zero pips means entry == stop: no stop distance, no trade.
        let lot_size = if pips.is_positive() {
            LotSize::from_raw(Self::raw_lots(risk_amount, pips)?)
        } else {
            LotSize::ZERO
        };

        Ok(LotSizeCalculation {
            lot_size,
            pips,
            risk_amount,
        })
    }

    fn risk_amount(balance: Decimal, risk_percent: Decimal) -> Result<Decimal, LotSizingError> {
        let fraction = risk_percent
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or(LotSizingError::ArithmeticOverflow {
                stage: "risk fraction",
            })?;

        balance
            .checked_mul(fraction)
            .ok_or(LotSizingError::ArithmeticOverflow {
                stage: "risk amount",
            })
    }

    fn raw_lots(risk_amount: Decimal, pips: PipDistance) -> Result<Decimal, LotSizingError> {
        let loss_per_lot = pips
            .value()
            .checked_mul(PIP_VALUE_PER_STANDARD_LOT)
            .ok_or(LotSizingError::ArithmeticOverflow {
                stage: "loss per lot",
            })?;

        risk_amount
            .checked_div(loss_per_lot)
            .ok_or(LotSizingError::ArithmeticOverflow { stage: "raw lots" })
    }
}
