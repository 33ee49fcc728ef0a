//! Error types and result aliases for configuration resolution.
//!
//! Every failure is fatal to the call that raised it: nothing here is retried
//! and no partially resolved configuration is ever returned alongside an error.

use thiserror::Error;

/// Unified error type for all wepy operations
#[derive(Error, Debug)]
pub enum WepyError {
    #[error("No configuration file found in the current directory: {path}")]
    ConfigNotFound { path: String },

    #[error("Unexpected type: {key} expect a {expected}")]
    InvalidOptionType { key: String, expected: String },

    #[error("Failed to load {path}: {message}")]
    ConfigLoad { path: String, message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for wepy operations
pub type WepyResult<T> = Result<T, WepyError>;

impl WepyError {
    /// Create an IO error from std::io::Error
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a load error for a configuration file
    pub fn config_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Key path of the offending option, for type errors
    pub fn option_key(&self) -> Option<&str> {
        match self {
            WepyError::InvalidOptionType { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            WepyError::ConfigNotFound { .. } => {
                Some("Run wepy from the project root or create a wepy.config.js there")
            },
            WepyError::InvalidOptionType { .. } => {
                Some("Fix the option in wepy.config.js or the value passed on the command line")
            },
            WepyError::ConfigLoad { .. } => {
                Some("wepy.config.js must export a plain object literal")
            },
            WepyError::Io { .. } => None,
        }
    }
}
