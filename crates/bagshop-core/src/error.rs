//! Error types for BagShop operations.
//!
//! [`BagshopError`] covers everything outside the pure calculation engine:
//! configuration files, I/O, serialization and logging setup. Parameter range
//! errors from `bagshop-cost` surface as [`BagshopError::ConfigValidation`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`BagshopError`].
pub type Result<T> = std::result::Result<T, BagshopError>;

/// Error type for BagShop application operations.
///
/// Errors are surfaced to the caller with an actionable message; nothing is
/// retried or silently swallowed.
#[derive(Debug, Error)]
pub enum BagshopError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration file not found
    #[error("Configuration not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file is invalid YAML
    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// Configuration parsed but the parameters are out of range
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// Generic I/O error with context
    #[error("I/O error {operation}: {path}")]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory creation failed
    #[error("Failed to create directory: {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Serialization Errors
    // =========================================================================
    /// YAML serialization error
    #[error("YAML error in {context}: {message}")]
    Yaml { context: String, message: String },

    // =========================================================================
    // Logging / Internal Errors
    // =========================================================================
    /// Logging subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    LoggingInit { message: String },

    /// Internal error (bug in BagShop)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BagshopError {
    // =========================================================================
    // Constructor helpers for common error patterns
    // =========================================================================

    /// Create a ConfigNotFound error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Create a ConfigNotFound error with source
    pub fn config_not_found_with_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigNotFound {
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a ConfigValidation error
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a YAML error
    pub fn yaml(context: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            context: context.into(),
            message: source.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    // =========================================================================
    // Error classification helpers
    // =========================================================================

    /// Returns true if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::ConfigInvalid { .. } | Self::ConfigValidation { .. }
        )
    }

    /// Returns actionable guidance for the user
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => {
                Some("Run 'bagshop init > bagshop.yaml' to create a configuration file")
            }
            Self::ConfigInvalid { .. } => Some("Check YAML syntax against 'bagshop init' output"),
            Self::ConfigValidation { .. } => {
                Some("Shares and rates must lie in [0, 1] and amounts must be non-negative")
            }
            Self::DirectoryCreation { .. } => Some("Check permissions on the log directory"),
            _ => None,
        }
    }
}
