//! Query loggers.
//!
//! [`DebugLogger`] reconstructs each statement with its bound values filled
//! in. [`PlainLogger`] records what it is given without substitution.
//!
//! ```rust
//! use querytrace_core::{Bindings, DebugLogger, FixedProbe, MemoryWriter, OutputTarget, QueryLogger};
//!
//! let out = MemoryWriter::new();
//! let mut logger = DebugLogger::new()
//!     .with_probe(FixedProbe::interactive())
//!     .with_target(OutputTarget::writer(out.clone()));
//!
//! logger.log("SELECT * FROM book WHERE id = :id", Some(&Bindings::new().bind(":id", 7)));
//! logger.log("plain text", None);
//!
//! assert_eq!(logger.logs(), ["SELECT * FROM book WHERE id = 7", "plain text"]);
//! assert_eq!(out.contents(), "SELECT * FROM book WHERE id = 7\nplain text\n");
//! ```

use std::io::Write;
use tracing::trace;

use crate::assemble::assemble;
use crate::bindings::{Bindings, normalize_bindings};
use crate::config::TraceConfig;
use crate::render::ValueRenderer;
use crate::sink::{LogMode, OutputSink, OutputTarget};
use crate::slots::normalize_slots;
use crate::surface::{InteractiveProbe, Surface};
use crate::value::{IntegerProbe, can_be_treated_as_int};

/// Something that records executed queries.
pub trait QueryLogger {
    /// Record a parameterized query with its bindings.
    fn log_query(&mut self, sql: &str, bindings: &Bindings);

    /// Record a literal line.
    fn log_line(&mut self, line: &str);

    /// Record a query, or a literal line when there are no bindings.
    fn log(&mut self, sql: &str, bindings: Option<&Bindings>) {
        match bindings {
            Some(bindings) => self.log_query(sql, bindings),
            None => self.log_line(sql),
        }
    }
}

/// Logger that renders fully substituted SQL.
#[derive(Debug)]
pub struct DebugLogger {
    config: TraceConfig,
    sink: OutputSink,
    is_integer: IntegerProbe,
}

impl DebugLogger {
    /// Create a logger with the default configuration, writing to stdout.
    pub fn new() -> Self {
        Self::with_config(TraceConfig::default())
    }

    /// Create a logger with the given configuration.
    pub fn with_config(config: TraceConfig) -> Self {
        let mode = if config.muted {
            LogMode::Collect
        } else {
            LogMode::Echo
        };
        Self {
            config,
            sink: OutputSink::new().with_mode(mode),
            is_integer: can_be_treated_as_int,
        }
    }

    /// Set the interactive-context probe.
    pub fn with_probe(mut self, probe: impl InteractiveProbe + 'static) -> Self {
        self.sink = self.sink.with_probe(probe);
        self
    }

    /// Set the output target.
    pub fn with_target(mut self, target: OutputTarget) -> Self {
        self.sink = self.sink.with_target(target);
        self
    }

    /// Write to the given writer.
    pub fn with_writer(self, writer: impl Write + Send + 'static) -> Self {
        self.with_target(OutputTarget::writer(writer))
    }

    /// Replace the integer predicate used for type inference.
    pub fn with_integer_probe(mut self, probe: IntegerProbe) -> Self {
        self.is_integer = probe;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Set the maximum length of a rendered value; negative values clamp to zero.
    pub fn set_max_value_length(&mut self, len: i64) -> &mut Self {
        self.config.set_max_value_length(len);
        self
    }

    /// Render every value as a quoted string.
    pub fn set_force_string_binding(&mut self, yes: bool) -> &mut Self {
        self.config.force_string_binding = yes;
        self
    }

    /// Use markup output even in an interactive context.
    pub fn set_override_interactive_output(&mut self, yes: bool) -> &mut Self {
        self.config.override_interactive_output = yes;
        self
    }

    /// Change the output mode.
    pub fn set_mode(&mut self, mode: LogMode) -> &mut Self {
        self.config.muted = mode == LogMode::Collect;
        self.sink.set_mode(mode);
        self
    }

    /// Stop or resume writing traces. Traces are still collected.
    pub fn set_muted(&mut self, muted: bool) -> &mut Self {
        self.set_mode(if muted { LogMode::Collect } else { LogMode::Echo })
    }

    /// Check if output is muted.
    pub fn is_muted(&self) -> bool {
        self.sink.mode() == LogMode::Collect
    }

    /// Change the output target.
    pub fn set_target(&mut self, target: OutputTarget) -> &mut Self {
        self.sink.set_target(target);
        self
    }

    /// Surface the next trace renders for.
    pub fn surface(&self) -> Surface {
        self.sink.surface(self.config.override_interactive_output)
    }

    /// Renderer for the current configuration.
    pub fn renderer(&self) -> ValueRenderer {
        ValueRenderer::new(&self.config).with_integer_probe(self.is_integer)
    }

    /// Render a query without recording it.
    pub fn render(&self, sql: &str, bindings: &Bindings) -> String {
        self.render_for(sql, bindings, self.surface())
    }

    fn render_for(&self, sql: &str, bindings: &Bindings, surface: Surface) -> String {
        let template = normalize_slots(sql, surface);
        let bindings = normalize_bindings(bindings);
        let rendered = assemble(&template.sql, &bindings, &self.renderer());

        trace!(
            target: "querytrace",
            slots = template.slot_count,
            bindings = bindings.len(),
            surface = ?surface,
            "Rendered query trace"
        );
        rendered
    }

    /// Every recorded trace, oldest first.
    pub fn logs(&self) -> &[String] {
        self.sink.logs()
    }

    /// Recorded traces containing `needle`.
    pub fn grep(&self, needle: &str) -> Vec<&str> {
        self.sink.grep(needle)
    }

    /// Number of recorded traces.
    pub fn len(&self) -> usize {
        self.sink.logs().len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.sink.logs().is_empty()
    }

    /// Drop every recorded trace.
    pub fn clear(&mut self) {
        self.sink.clear();
    }
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryLogger for DebugLogger {
    fn log_query(&mut self, sql: &str, bindings: &Bindings) {
        let surface = self.surface();
        let line = self.render_for(sql, bindings, surface);
        self.sink.emit(line, surface);
    }

    fn log_line(&mut self, line: &str) {
        let surface = self.surface();
        self.sink.emit(line.to_string(), surface);
    }
}

/// Logger that records queries as given.
///
/// The template is recorded verbatim, followed by a second entry listing
/// the bindings when there are any.
#[derive(Debug, Default)]
pub struct PlainLogger {
    sink: OutputSink,
    override_interactive_output: bool,
}

impl PlainLogger {
    /// Create a logger writing to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interactive-context probe.
    pub fn with_probe(mut self, probe: impl InteractiveProbe + 'static) -> Self {
        self.sink = self.sink.with_probe(probe);
        self
    }

    /// Set the output target.
    pub fn with_target(mut self, target: OutputTarget) -> Self {
        self.sink = self.sink.with_target(target);
        self
    }

    /// Set the output mode.
    pub fn with_mode(mut self, mode: LogMode) -> Self {
        self.sink = self.sink.with_mode(mode);
        self
    }

    /// Use markup output even in an interactive context.
    pub fn set_override_interactive_output(&mut self, yes: bool) -> &mut Self {
        self.override_interactive_output = yes;
        self
    }

    /// Every recorded entry, oldest first.
    pub fn logs(&self) -> &[String] {
        self.sink.logs()
    }

    /// Recorded entries containing `needle`.
    pub fn grep(&self, needle: &str) -> Vec<&str> {
        self.sink.grep(needle)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.sink.logs().len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.sink.logs().is_empty()
    }

    /// Drop every recorded entry.
    pub fn clear(&mut self) {
        self.sink.clear();
    }
}

impl QueryLogger for PlainLogger {
    fn log_query(&mut self, sql: &str, bindings: &Bindings) {
        self.log_line(sql);
        if !bindings.is_empty() {
            self.log_line(&bindings.to_string());
        }
    }

    fn log_line(&mut self, line: &str) {
        let surface = self.sink.surface(self.override_interactive_output);
        self.sink.emit(line.to_string(), surface);
    }
}
