//! Diagnostic logging for querytrace itself.
//!
//! The formatter reports what it does through `tracing` under the
//! `querytrace` target. Installing a subscriber is controlled by environment
//! variables and needs the `tracing-subscriber` feature. Diagnostics go to
//! stderr so they never mix with traces written to stdout.
//!
//! # Environment Variables
//!
//! - `QUERYTRACE_DEBUG=true` - Enable debug logging
//! - `QUERYTRACE_DEBUG=1` - Enable debug logging
//! - `QUERYTRACE_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `QUERYTRACE_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use querytrace_core::logging;
//!
//! // Initialize logging (call once at startup)
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Environment variable enabling debug logging.
pub const ENV_DEBUG: &str = "QUERYTRACE_DEBUG";
/// Environment variable selecting the log level.
pub const ENV_LOG_LEVEL: &str = "QUERYTRACE_LOG_LEVEL";
/// Environment variable selecting the log format.
pub const ENV_LOG_FORMAT: &str = "QUERYTRACE_LOG_FORMAT";

/// Check if debug logging is enabled via `QUERYTRACE_DEBUG`.
///
/// Returns `true` if it is set to "true", "1", or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var(ENV_DEBUG)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `QUERYTRACE_LOG_LEVEL`.
///
/// Defaults to "debug" if `QUERYTRACE_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = || if is_debug_enabled() { "debug" } else { "warn" };

    match env::var(ENV_LOG_LEVEL) {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback(),
        },
        Err(_) => fallback(),
    }
}

/// Get the configured log format from `QUERYTRACE_LOG_FORMAT`.
///
/// Defaults to "json".
pub fn get_log_format() -> &'static str {
    env::var(ENV_LOG_FORMAT)
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize diagnostic logging.
///
/// Subsequent calls are no-ops. Nothing is installed unless
/// `QUERYTRACE_DEBUG` or `QUERYTRACE_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var(ENV_LOG_LEVEL).is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "querytrace={},querytrace_core={}",
                level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match get_log_format() {
                "json" => registry
                    .with(fmt::layer().with_writer(std::io::stderr).json())
                    .try_init(),
                "compact" => registry
                    .with(fmt::layer().with_writer(std::io::stderr).compact())
                    .try_init(),
                _ => registry
                    .with(fmt::layer().with_writer(std::io::stderr).pretty())
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(
                    level = level,
                    format = get_log_format(),
                    "querytrace logging initialized"
                );
            }
        }
    });
}

/// Debug-level event, emitted only when `QUERYTRACE_DEBUG` is enabled.
#[macro_export]
macro_rules! querytrace_debug {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            tracing::debug!($($arg)*);
        }
    };
}

/// Trace-level event, emitted only when `QUERYTRACE_DEBUG` is enabled.
#[macro_export]
macro_rules! querytrace_trace {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            tracing::trace!($($arg)*);
        }
    };
}
