//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod calculation_dto;

pub use calculation_dto::{CalculateLotSizeRequestDto, CalculationResultDto, FieldValue, fields};
