//! Configuration Module
//!
//! Environment-driven configuration for the calculator service.

mod settings;

pub use settings::{AppConfig, ConfigError, LogFormat, LoggingSettings, ServerSettings};
