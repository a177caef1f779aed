//! Configuration errors.

use thiserror::Error;

/// Reasons a configuration is rejected at controller construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("at least one runway is required")]
    NoRunways,

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("aircraft cap must be at least 1")]
    ZeroCap,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
