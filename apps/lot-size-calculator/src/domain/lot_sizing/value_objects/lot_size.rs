//! Broker-tradable lot size.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::format_two_places;

/// Smallest lot a broker accepts, and the lot increment (0.01 = one micro lot).
pub const MIN_LOT_SIZE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// A lot size that satisfies the broker increment rule.
///
/// Either exactly zero (no trade) or at least [`MIN_LOT_SIZE`], with at most
/// two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotSize(Decimal);

impl LotSize {
    /// No position.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Broker minimum lot.
    pub const MIN: Self = Self(MIN_LOT_SIZE);

    /// Apply the broker lot rule to a raw, unrounded lot count.
    ///
    /// - `raw <= 0` gives zero
    /// - `0 < raw < 0.01` is raised to the 0.01 minimum
    /// - anything else is rounded to the nearest 0.01 (ties away from zero)
    #[must_use]
    pub fn from_raw(raw: Decimal) -> Self {
        if raw <= Decimal::ZERO {
            return Self::ZERO;
        }
        if raw < MIN_LOT_SIZE {
            return Self::MIN;
        }
        Self(raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Lot count.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// True when no position should be opened.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for LotSize {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for LotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_two_places(self.0))
    }
}
