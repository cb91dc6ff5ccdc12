//! Trace buffer and output emission.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::surface::{InteractiveProbe, Surface, TerminalProbe};

/// Leading keywords of statements that change the schema.
pub const SCHEMA_KEYWORDS: [&str; 3] = ["CREATE", "ALTER", "DROP"];

/// Check if a line starts with a schema-changing keyword.
///
/// The check is case-sensitive, matching how the statement was written.
pub fn is_schema_change(line: &str) -> bool {
    SCHEMA_KEYWORDS.iter().any(|kw| line.starts_with(kw))
}

/// Whether traces are written out or only collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// Collect and write every trace.
    #[default]
    Echo,
    /// Collect traces without writing them.
    Collect,
}

/// Where emitted traces go.
#[derive(Default)]
pub enum OutputTarget {
    /// Standard output.
    #[default]
    Stdout,
    /// Any writer.
    Writer(Box<dyn Write + Send>),
    /// `tracing` events under the `querytrace::sql` target.
    Tracing,
}

impl OutputTarget {
    /// Wrap a writer.
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::Writer(Box::new(writer))
    }
}

impl fmt::Debug for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Writer(_) => f.write_str("Writer(..)"),
            Self::Tracing => f.write_str("Tracing"),
        }
    }
}

/// In-memory writer whose contents can be read while it is owned elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Append-only trace buffer plus the output it is echoed to.
///
/// Lines are always buffered, even when muted; muting only stops them
/// from being written.
pub struct OutputSink {
    logs: Vec<String>,
    mode: LogMode,
    target: OutputTarget,
    probe: Box<dyn InteractiveProbe>,
}

impl OutputSink {
    /// Create a sink writing to stdout, probing the terminal.
    pub fn new() -> Self {
        Self {
            logs: Vec::new(),
            mode: LogMode::Echo,
            target: OutputTarget::Stdout,
            probe: Box::new(TerminalProbe),
        }
    }

    /// Set the output target.
    pub fn with_target(mut self, target: OutputTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the interactive-context probe.
    pub fn with_probe(mut self, probe: impl InteractiveProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Set the output mode.
    pub fn with_mode(mut self, mode: LogMode) -> Self {
        self.mode = mode;
        self
    }

    /// Current output mode.
    pub fn mode(&self) -> LogMode {
        self.mode
    }

    /// Change the output mode.
    pub fn set_mode(&mut self, mode: LogMode) {
        self.mode = mode;
    }

    /// Change the output target.
    pub fn set_target(&mut self, target: OutputTarget) {
        self.target = target;
    }

    /// Surface to render for, given the override setting.
    pub fn surface(&self, override_interactive_output: bool) -> Surface {
        Surface::select(self.probe.as_ref(), override_interactive_output)
    }

    /// Buffer a line and write it unless muted.
    pub fn emit(&mut self, line: String, surface: Surface) {
        let highlight = is_schema_change(&line);

        if self.mode == LogMode::Echo {
            self.write(&line, surface, highlight);
        }
        self.logs.push(line);
    }

    fn write(&mut self, line: &str, surface: Surface, highlight: bool) {
        let result = match &mut self.target {
            OutputTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(surface.line(line, highlight).as_bytes())
                    .and_then(|()| out.flush())
            }
            OutputTarget::Writer(writer) => writer
                .write_all(surface.line(line, highlight).as_bytes())
                .and_then(|()| writer.flush()),
            OutputTarget::Tracing => {
                tracing::info!(target: "querytrace::sql", highlight, "{}", line);
                Ok(())
            }
        };

        if let Err(error) = result {
            tracing::warn!(target: "querytrace", error = %error, "Failed to write trace line");
        }
    }

    /// Every buffered line, oldest first.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Buffered lines containing `needle`.
    pub fn grep(&self, needle: &str) -> Vec<&str> {
        self.logs
            .iter()
            .filter(|line| line.contains(needle))
            .map(String::as_str)
            .collect()
    }

    /// Drop every buffered line.
    pub fn clear(&mut self) {
        self.logs.clear();
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("logs", &self.logs.len())
            .field("mode", &self.mode)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
