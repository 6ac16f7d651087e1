//! Calculation inputs and outputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lot_size::LotSize;
use super::pip_convention::PipConvention;
use super::pip_distance::PipDistance;

/// Parsed inputs of a lot size calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSizeParameters {
    /// Trade entry price.
    pub entry_price: Decimal,
    /// Stop-loss price.
    pub stop_loss_price: Decimal,
    /// Account equity in account currency.
    pub account_balance: Decimal,
    /// Percent of the balance to risk (1 = 1%).
    pub risk_percent: Decimal,
    /// Pip convention of the instrument.
    pub convention: PipConvention,
}

/// Outcome of a lot size calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSizeCalculation {
    /// Recommended, broker-rounded lot size.
    pub lot_size: LotSize,
    /// Pips lost if the stop-loss is hit.
    pub pips: PipDistance,
    /// Account currency put at risk.
    pub risk_amount: Decimal,
}
