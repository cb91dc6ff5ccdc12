//! Error types for trace configuration.
//!
//! Logging itself never fails: every malformed call degrades to a literal
//! line or a textual value. Only loading a [`TraceConfig`](crate::TraceConfig)
//! from a file or the environment can produce a [`TraceError`].

use miette::Diagnostic;
use thiserror::Error;

/// Result type for configuration operations.
pub type TraceResult<T> = Result<T, TraceError>;

/// Errors that can occur while loading trace configuration.
#[derive(Error, Debug, Diagnostic)]
pub enum TraceError {
    /// Error reading a configuration file.
    #[error("failed to read config file: {path}")]
    #[diagnostic(code(querytrace::config::io_error))]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("invalid trace configuration: {source}")]
    #[diagnostic(
        code(querytrace::config::toml_error),
        help("settings live at the top level or in a [trace] table")
    )]
    Toml {
        /// Underlying parse error.
        #[from]
        source: toml::de::Error,
    },

    /// An environment override holds a value that cannot be parsed.
    #[error("invalid value `{value}` for {name}: {message}")]
    #[diagnostic(code(querytrace::config::invalid_env))]
    InvalidEnv {
        /// Variable name.
        name: String,
        /// Raw value found in the environment.
        value: String,
        /// What was expected instead.
        message: String,
    },
}

impl TraceError {
    /// Create an invalid environment value error.
    pub fn invalid_env(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidEnv {
            name: name.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from the environment.
    pub fn is_env_error(&self) -> bool {
        matches!(self, Self::InvalidEnv { .. })
    }
}
