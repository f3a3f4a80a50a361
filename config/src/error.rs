//! Error types for drive configuration.
//!
//! Covers reading and writing the YAML file as well as the structural checks
//! done by [`DriveConfig::validate`](crate::DriveConfig::validate).

use thiserror::Error;

/// Errors that can occur while loading, saving or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Configuration version string is empty.
    #[error("config version cannot be empty")]
    EmptyVersion,

    /// A mapping has an unusable local device or address.
    #[error("invalid drive mapping: {0}")]
    InvalidMapping(String),

    /// Two mappings claim the same local device.
    #[error("local device mapped more than once: {0}")]
    DuplicateDevice(String),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
