//! Renderer configuration.
//!
//! Each logger owns its own [`TraceConfig`]; nothing is process-global.
//! Configuration can be built in code, parsed from TOML, or adjusted with
//! environment overrides.
//!
//! ```rust
//! use querytrace_core::TraceConfig;
//!
//! let config = TraceConfig::from_str(r#"
//!     [trace]
//!     max_value_length = 12
//!     force_string_binding = true
//! "#).unwrap();
//!
//! assert_eq!(config.max_value_length, 12);
//! assert!(config.force_string_binding);
//! assert!(!config.override_interactive_output);
//! ```
//!
//! # Environment Variables
//!
//! - `QUERYTRACE_MAX_VALUE_LENGTH` - maximum characters per bound value
//! - `QUERYTRACE_FORCE_STRING` - render every value as a string
//! - `QUERYTRACE_OVERRIDE_CLI` - always use markup output
//! - `QUERYTRACE_MUTED` - collect traces without writing them

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::{TraceError, TraceResult};

/// Default maximum length of a rendered value.
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 40;

/// Environment variable overriding `max_value_length`.
pub const ENV_MAX_VALUE_LENGTH: &str = "QUERYTRACE_MAX_VALUE_LENGTH";
/// Environment variable overriding `force_string_binding`.
pub const ENV_FORCE_STRING: &str = "QUERYTRACE_FORCE_STRING";
/// Environment variable overriding `override_interactive_output`.
pub const ENV_OVERRIDE_CLI: &str = "QUERYTRACE_OVERRIDE_CLI";
/// Environment variable overriding `muted`.
pub const ENV_MUTED: &str = "QUERYTRACE_MUTED";

/// Settings read on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// Maximum characters of a bound value before it is cut off.
    #[serde(deserialize_with = "clamped_length")]
    pub max_value_length: usize,

    /// Render every value as a quoted string.
    pub force_string_binding: bool,

    /// Use markup output even when attached to an interactive terminal.
    pub override_interactive_output: bool,

    /// Collect traces without writing them out.
    pub muted: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
            force_string_binding: false,
            override_interactive_output: false,
            muted: false,
        }
    }
}

impl TraceConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> TraceResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TraceError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Settings may sit at the top level or inside a `[trace]` table; both
    /// levels are merged and the `[trace]` table wins on a shared key.
    /// `${VAR}` references are expanded from the environment first.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> TraceResult<Self> {
        let expanded = expand_env_vars(content);
        let mut table: toml::Table = toml::from_str(&expanded)?;

        match table.remove("trace") {
            Some(toml::Value::Table(trace)) => table.extend(trace),
            Some(other) => {
                table.insert("trace".to_string(), other);
            }
            None => {}
        }

        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Apply `QUERYTRACE_*` environment overrides.
    pub fn with_env_overrides(mut self) -> TraceResult<Self> {
        if let Some(raw) = env_value(ENV_MAX_VALUE_LENGTH) {
            let len = raw.trim().parse::<i64>().map_err(|_| {
                TraceError::invalid_env(ENV_MAX_VALUE_LENGTH, &raw, "expected an integer")
            })?;
            self.set_max_value_length(len);
        }
        if let Some(flag) = env_flag(ENV_FORCE_STRING)? {
            self.force_string_binding = flag;
        }
        if let Some(flag) = env_flag(ENV_OVERRIDE_CLI)? {
            self.override_interactive_output = flag;
        }
        if let Some(flag) = env_flag(ENV_MUTED)? {
            self.muted = flag;
        }

        crate::querytrace_debug!(target: "querytrace", config = ?self, "Applied environment overrides");
        Ok(self)
    }

    /// Set the maximum value length; negative lengths clamp to zero.
    pub fn set_max_value_length(&mut self, len: i64) -> &mut Self {
        self.max_value_length = clamp_length(len);
        self
    }

    /// Builder form of [`set_max_value_length`](Self::set_max_value_length).
    pub fn with_max_value_length(mut self, len: i64) -> Self {
        self.set_max_value_length(len);
        self
    }

    /// Render every value as a string.
    pub fn with_force_string_binding(mut self, yes: bool) -> Self {
        self.force_string_binding = yes;
        self
    }

    /// Always render markup output.
    pub fn with_override_interactive_output(mut self, yes: bool) -> Self {
        self.override_interactive_output = yes;
        self
    }

    /// Start muted.
    pub fn with_muted(mut self, yes: bool) -> Self {
        self.muted = yes;
        self
    }
}

fn clamp_length(len: i64) -> usize {
    usize::try_from(len.max(0)).unwrap_or(usize::MAX)
}

fn clamped_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_length)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_flag(name: &str) -> TraceResult<Option<bool>> {
    let Some(raw) = env_value(name) else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(TraceError::invalid_env(name, &raw, "expected a boolean")),
    }
}

/// Expand `${VAR}` references; unknown variables are left untouched.
fn expand_env_vars(content: &str) -> String {
    let re = match regex_lite::Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return content.to_string(),
    };

    re.replace_all(content, |caps: &regex_lite::Captures<'_>| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}
