//! Pip distance between entry and stop-loss.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::format_two_places;
use super::pip_convention::PipConvention;
use crate::domain::lot_sizing::LotSizingError;

/// Whole number of pips between two prices. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipDistance(Decimal);

impl PipDistance {
    /// Zero pips.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Absolute distance from `entry` to `stop`, rounded to the nearest pip
    /// (ties away from zero).
    pub fn between(
        entry: Decimal,
        stop: Decimal,
        convention: PipConvention,
    ) -> Result<Self, LotSizingError> {
        let price_diff = entry
            .checked_sub(stop)
            .ok_or(LotSizingError::ArithmeticOverflow {
                stage: "price difference",
            })?;

        let pips = price_diff
            .abs()
            .checked_mul(convention.pips_per_price_unit())
            .ok_or(LotSizingError::ArithmeticOverflow {
                stage: "pip distance",
            })?;

        Ok(Self(
            pips.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        ))
    }

    /// Number of pips.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// True when at least one pip separates the prices.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for PipDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_two_places(self.0))
    }
}
