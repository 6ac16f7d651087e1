//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod calculate_lot_size;

pub use calculate_lot_size::CalculateLotSizeUseCase;
