//! Pip convention value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many price units make one pip for an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipConvention {
    /// Four-decimal quotes (EUR/USD, GBP/USD, ...). One pip = 0.0001.
    #[default]
    Standard,
    /// Two-decimal quotes (XAU/USD, USD/JPY, ...). One pip = 0.01.
    GoldOrJpy,
}

impl PipConvention {
    /// Select the convention from the gold/JPY flag.
    #[must_use]
    pub const fn from_gold_or_jpy(is_gold_or_jpy: bool) -> Self {
        if is_gold_or_jpy {
            Self::GoldOrJpy
        } else {
            Self::Standard
        }
    }

    /// Factor converting a price difference into pips.
    #[must_use]
    pub fn pips_per_price_unit(&self) -> Decimal {
        match self {
            Self::Standard => Decimal::from(10_000),
            Self::GoldOrJpy => Decimal::from(100),
        }
    }

    /// Whether this is the gold/JPY convention.
    #[must_use]
    pub const fn is_gold_or_jpy(&self) -> bool {
        matches!(self, Self::GoldOrJpy)
    }

    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::GoldOrJpy => "gold_or_jpy",
        }
    }
}

impl fmt::Display for PipConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
