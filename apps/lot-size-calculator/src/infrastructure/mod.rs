//! Infrastructure Layer
//!
//! Adapters around the application core: HTTP, configuration, logging and
//! metrics.

pub mod config;
pub mod http;
pub mod metrics;
pub mod telemetry;
