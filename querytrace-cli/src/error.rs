//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

use querytrace_core::TraceError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(querytrace::io))]
    Io(#[from] std::io::Error),

    /// Trace configuration error
    #[error(transparent)]
    #[diagnostic(transparent)]
    Trace(#[from] TraceError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(querytrace::config))]
    Config(String),

    /// Malformed binding argument
    #[error("Invalid binding '{arg}': {message}")]
    #[diagnostic(
        code(querytrace::binding),
        help("Use `value`, `:name=value` or `N=value`, optionally suffixed with `::int` or `::str`")
    )]
    Binding {
        /// The argument as given
        arg: String,
        /// What is wrong with it
        message: String,
    },

    /// Malformed replay line
    #[error("Replay error on line {line}: {message}")]
    #[diagnostic(
        code(querytrace::replay),
        help("Each line must be a JSON object with a \"sql\" string and optional \"bindings\"")
    )]
    Replay {
        /// 1-based line number
        line: usize,
        /// What is wrong with it
        message: String,
    },
}

impl CliError {
    /// Create a binding error.
    pub fn binding(arg: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Binding {
            arg: arg.into(),
            message: message.into(),
        }
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Config(format!("Failed to serialize TOML: {}", err))
    }
}
