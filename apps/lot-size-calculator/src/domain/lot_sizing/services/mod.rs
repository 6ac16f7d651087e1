//! Lot sizing domain services.

mod lot_size_calculator;

pub use lot_size_calculator::{LotSizeCalculator, PIP_VALUE_PER_STANDARD_LOT};
