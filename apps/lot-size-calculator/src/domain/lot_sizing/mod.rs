//! Lot Sizing Bounded Context
//!
//! Turns an entry price, a stop-loss price, an account balance and a risk
//! percentage into a broker-tradable lot size.
//!
//! # Rules
//!
//! - Pip distance is `round(|entry - stop| * 10_000)` for standard pairs and
//!   `round(|entry - stop| * 100)` for gold and JPY-quoted pairs.
//! - Risk amount is `balance * risk_pct / 100`.
//! - Raw lots are `risk_amount / (pips * 10)`; a zero pip distance yields zero lots.
//! - Lots are clamped to the broker minimum of 0.01 and rounded to 0.01.
//!
//! # Example
//!
//! ```rust
//! use lot_size_calculator::domain::lot_sizing::{
//!     LotSizeCalculator, LotSizeParameters, PipConvention,
//! };
//! use rust_decimal::Decimal;
//!
//! let params = LotSizeParameters {
//!     entry_price: Decimal::new(200_000, 2),
//!     stop_loss_price: Decimal::new(199_950, 2),
//!     account_balance: Decimal::from(5000),
//!     risk_percent: Decimal::from(2),
//!     convention: PipConvention::GoldOrJpy,
//! };
//!
//! let calc = LotSizeCalculator::new().calculate(&params).unwrap();
//! assert_eq!(calc.lot_size.to_string(), "0.20");
//! assert_eq!(calc.pips.to_string(), "50.00");
//! ```

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::LotSizingError;
pub use services::{LotSizeCalculator, PIP_VALUE_PER_STANDARD_LOT};
pub use value_objects::{
    LotSize, LotSizeCalculation, LotSizeParameters, MIN_LOT_SIZE, PipConvention, PipDistance,
    parse_decimal,
};
