//! Service Configuration Settings
//!
//! Configuration types for the calculator, loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default static asset directory.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, coloured output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse format from string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for anything but `pretty` or `json`.
    pub fn from_str_case_insensitive(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "LOG_FORMAT".to_string(),
                value: s.to_string(),
            }),
        }
    }

    /// Name of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Listen port.
    pub port: u16,
    /// Listen address.
    pub bind_address: IpAddr,
    /// Directory served for unmatched GET requests.
    pub static_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerSettings {
    /// Socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggingSettings {
    /// Output format.
    pub format: LogFormat,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Server settings.
    pub server: ServerSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerSettings::default();

        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => parse_port(&raw)?,
            None => defaults.port,
        };

        let bind_address = match non_empty(&lookup, "BIND_ADDRESS") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "BIND_ADDRESS".to_string(),
                    value: raw,
                })?,
            None => defaults.bind_address,
        };

        let static_dir = non_empty(&lookup, "STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);

        let format = match non_empty(&lookup, "LOG_FORMAT") {
            Some(raw) => LogFormat::from_str_case_insensitive(&raw)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            server: ServerSettings {
                port,
                bind_address,
                static_dir,
            },
            logging: LoggingSettings { format },
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be used.
    #[error("invalid value for environment variable {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
    /// Port 0 would bind an ephemeral port.
    #[error("PORT must be between 1 and 65535")]
    ZeroPort,
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(0) => Err(ConfigError::ZeroPort),
        Ok(port) => Ok(port),
        Err(_) => Err(ConfigError::InvalidValue {
            key: "PORT".to_string(),
            value: raw.to_string(),
        }),
    }
}
