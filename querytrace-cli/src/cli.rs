//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// QueryTrace CLI - Readable SQL traces
#[derive(Parser, Debug)]
#[command(name = "querytrace")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "QueryTrace CLI - Readable SQL traces", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one query with its bindings
    Render(RenderArgs),

    /// Render every query in a JSON Lines file
    Replay(ReplayArgs),

    /// Print the resolved configuration
    Config(ConfigArgs),
}

// =============================================================================
// Shared Options
// =============================================================================

/// Options controlling how values are rendered
#[derive(Args, Debug, Clone, Default)]
pub struct TraceOptions {
    /// Configuration file (TOML)
    #[arg(short, long, env = "QUERYTRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum characters per bound value
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    pub max_length: Option<i64>,

    /// Render every value as a quoted string
    #[arg(short, long)]
    pub strings: bool,

    /// Output surface
    #[arg(long, value_enum, default_value_t = SurfaceChoice::Auto)]
    pub surface: SurfaceChoice,

    /// Shorthand for `--surface markup`
    #[arg(long, conflicts_with = "surface")]
    pub markup: bool,
}

impl TraceOptions {
    /// Surface requested on the command line.
    pub fn surface_choice(&self) -> SurfaceChoice {
        if self.markup {
            SurfaceChoice::Markup
        } else {
            self.surface
        }
    }
}

/// Output surface selection
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurfaceChoice {
    /// Console when stdout is a terminal, markup otherwise
    #[default]
    Auto,
    /// ANSI-colored console output
    Console,
    /// HTML-style markup output
    Markup,
}

impl std::fmt::Display for SurfaceChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceChoice::Auto => write!(f, "auto"),
            SurfaceChoice::Console => write!(f, "console"),
            SurfaceChoice::Markup => write!(f, "markup"),
        }
    }
}

// =============================================================================
// Render Command
// =============================================================================

/// Arguments for the `render` command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// SQL template with `?` markers or `:name` placeholders
    pub sql: String,

    /// Bindings: `value`, `:name=value` or `N=value`, with an optional
    /// `::int` / `::str` suffix. `null` binds the NULL sentinel.
    #[arg(allow_negative_numbers = true)]
    pub bindings: Vec<String>,

    /// Log the SQL as a literal line, ignoring placeholders
    #[arg(long, conflicts_with = "bindings")]
    pub literal: bool,

    #[command(flatten)]
    pub options: TraceOptions,
}

// =============================================================================
// Replay Command
// =============================================================================

/// Arguments for the `replay` command
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// JSON Lines file of `{"sql": ..., "bindings": ...}` objects (`-` for stdin)
    pub file: PathBuf,

    #[command(flatten)]
    pub options: TraceOptions,
}

// =============================================================================
// Config Command
// =============================================================================

/// Arguments for the `config` command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print as TOML, suitable for `--config`
    #[arg(long)]
    pub toml: bool,

    #[command(flatten)]
    pub options: TraceOptions,
}
