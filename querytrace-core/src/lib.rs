//! # querytrace-core
//!
//! Readable SQL traces for parameterized queries.
//!
//! A database layer executes statements with placeholders and a separate set
//! of bound values. This crate rebuilds the statement a human would want to
//! read, with every bound value rendered inline:
//! - Positional `?` markers and numeric binding keys are mapped onto named
//!   `:slotN` placeholders
//! - Values are rendered as SQL literals (integers bare, strings quoted,
//!   `NULL` as a keyword) and cut off after a configurable length
//! - Output is decorated for a terminal (ANSI colors) or for markup
//! - Schema changes (`CREATE`, `ALTER`, `DROP`) are highlighted
//! - Every trace is kept in a per-logger buffer for later inspection
//!
//! ## Logging a Query
//!
//! ```rust
//! use querytrace_core::prelude::*;
//!
//! let mut logger = DebugLogger::new()
//!     .with_probe(FixedProbe::interactive())
//!     .with_target(OutputTarget::writer(MemoryWriter::new()));
//!
//! logger.log(
//!     "UPDATE book SET title = :title WHERE id = :id",
//!     Some(&bindings! { ":title" => "Dune", ":id" => 7 }),
//! );
//!
//! assert_eq!(logger.logs(), ["UPDATE book SET title = 'Dune' WHERE id = 7"]);
//! ```
//!
//! ## Positional Markers
//!
//! Positional markers are highlighted in the trace, so the rendered value
//! stands out from the surrounding statement:
//!
//! ```rust
//! use querytrace_core::prelude::*;
//!
//! let mut logger = DebugLogger::new()
//!     .with_probe(FixedProbe::non_interactive())
//!     .with_target(OutputTarget::writer(MemoryWriter::new()));
//!
//! logger.log("SELECT * FROM book WHERE id = ?", Some(&bindings![42]));
//!
//! assert_eq!(
//!     logger.logs(),
//!     ["SELECT * FROM book WHERE id = <b style=\"color:green\">42</b>"]
//! );
//! ```
//!
//! ## Value Rendering
//!
//! ```rust
//! use querytrace_core::{Binding, ParamType, TraceConfig, ValueRenderer};
//!
//! let renderer = ValueRenderer::new(&TraceConfig::new().with_max_value_length(5));
//!
//! assert_eq!(renderer.render(&Binding::new("abcdefgh")), "'abcde... '");
//! assert_eq!(renderer.render(&Binding::new("123")), "123");
//! assert_eq!(renderer.render(&Binding::typed(123, ParamType::String)), "'123'");
//! assert_eq!(renderer.render(&Binding::null()), "NULL");
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod assemble;
pub mod bindings;
pub mod config;
pub mod error;
pub mod logger;
pub mod logging;
#[macro_use]
pub mod macros;
pub mod render;
pub mod shared;
pub mod sink;
pub mod slots;
pub mod surface;
pub mod value;

pub use assemble::assemble;
pub use bindings::{BindingKey, Bindings, normalize_bindings};
pub use config::{DEFAULT_MAX_VALUE_LENGTH, TraceConfig};
pub use error::{TraceError, TraceResult};
pub use logger::{DebugLogger, PlainLogger, QueryLogger};
pub use render::ValueRenderer;
pub use shared::SharedLogger;
pub use sink::{LogMode, MemoryWriter, OutputSink, OutputTarget, is_schema_change};
pub use slots::{NormalizedTemplate, normalize_slots, slot_name};
pub use surface::{FixedProbe, InteractiveProbe, Surface, TerminalProbe};
pub use value::{Binding, BoundValue, IntegerProbe, NULL_LITERAL, ParamType, can_be_treated_as_int};

// Re-export logging utilities
pub use logging::{get_log_format, get_log_level, init as init_logging, is_debug_enabled};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bindings;
    pub use crate::bindings::{BindingKey, Bindings};
    pub use crate::config::TraceConfig;
    pub use crate::error::{TraceError, TraceResult};
    pub use crate::logger::{DebugLogger, PlainLogger, QueryLogger};
    pub use crate::shared::SharedLogger;
    pub use crate::sink::{LogMode, MemoryWriter, OutputTarget};
    pub use crate::surface::{FixedProbe, InteractiveProbe, Surface};
    pub use crate::value::{Binding, BoundValue, ParamType};
}
