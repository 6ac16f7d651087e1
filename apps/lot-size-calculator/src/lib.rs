// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Lot Size Calculator - Rust Core Library
//!
//! Risk-based position sizing for FX and gold instruments.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Pure sizing rules with no I/O
//!   - `lot_sizing`: pip conventions, pip distance, broker lot rounding
//!
//! - **Application**: Use cases and DTOs
//!   - `use_cases`: `CalculateLotSize`
//!   - `dto`: wire-level request/response shapes
//!
//! - **Infrastructure**: Adapters
//!   - `http`: Axum form + JSON endpoints, HTML view
//!   - `config`: Environment configuration
//!   - `telemetry`: tracing subscriber setup
//!   - `metrics`: Prometheus recorder
//!
//! # Example
//!
//! ```rust
//! use lot_size_calculator::application::dto::CalculateLotSizeRequestDto;
//! use lot_size_calculator::application::use_cases::CalculateLotSizeUseCase;
//!
//! let request = CalculateLotSizeRequestDto::from_text("1.1050", "1.1000", "10000", "1", false);
//! let result = CalculateLotSizeUseCase::new().execute(&request).unwrap();
//!
//! assert_eq!(result.recommended_lot_size, "0.20");
//! assert_eq!(result.pips_if_loose, "50.00");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core sizing rules with no external dependencies.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Service-boundary error types.
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::lot_sizing::{
    LotSize, LotSizeCalculation, LotSizeCalculator, LotSizeParameters, LotSizingError,
    PipConvention, PipDistance,
};

pub use application::dto::{CalculateLotSizeRequestDto, CalculationResultDto, FieldValue};
pub use application::use_cases::CalculateLotSizeUseCase;

pub use infrastructure::config::{AppConfig, ConfigError, LogFormat, LoggingSettings, ServerSettings};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::metrics::init_metrics;
