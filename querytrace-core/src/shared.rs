//! Thread-safe handle to a [`DebugLogger`].
//!
//! One logger per connection needs no locking. When several threads share a
//! connection, wrap its logger in a [`SharedLogger`]: log calls, setting
//! changes and buffer reads are serialized by one lock.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::bindings::Bindings;
use crate::logger::{DebugLogger, QueryLogger};

/// Cloneable, lock-protected [`DebugLogger`].
#[derive(Debug, Clone)]
pub struct SharedLogger {
    inner: Arc<Mutex<DebugLogger>>,
}

impl SharedLogger {
    /// Share a logger.
    pub fn new(logger: DebugLogger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    /// Run `f` with exclusive access to the logger.
    pub fn with<R>(&self, f: impl FnOnce(&mut DebugLogger) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Record a query, or a literal line when there are no bindings.
    pub fn log(&self, sql: &str, bindings: Option<&Bindings>) {
        self.inner.lock().log(sql, bindings);
    }

    /// Record a literal line.
    pub fn log_line(&self, line: &str) {
        self.inner.lock().log_line(line);
    }

    /// Copy of every recorded trace.
    pub fn logs(&self) -> Vec<String> {
        self.inner.lock().logs().to_vec()
    }

    /// Recorded traces containing `needle`.
    pub fn grep(&self, needle: &str) -> Vec<String> {
        self.inner
            .lock()
            .grep(needle)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Number of recorded traces.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop every recorded trace.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Set the maximum length of a rendered value.
    pub fn set_max_value_length(&self, len: i64) {
        self.inner.lock().set_max_value_length(len);
    }

    /// Render every value as a quoted string.
    pub fn set_force_string_binding(&self, yes: bool) {
        self.inner.lock().set_force_string_binding(yes);
    }

    /// Use markup output even in an interactive context.
    pub fn set_override_interactive_output(&self, yes: bool) {
        self.inner.lock().set_override_interactive_output(yes);
    }

    /// Stop or resume writing traces.
    pub fn set_muted(&self, muted: bool) {
        self.inner.lock().set_muted(muted);
    }
}

impl From<DebugLogger> for SharedLogger {
    fn from(logger: DebugLogger) -> Self {
        Self::new(logger)
    }
}

impl QueryLogger for SharedLogger {
    fn log_query(&mut self, sql: &str, bindings: &Bindings) {
        self.inner.lock().log_query(sql, bindings);
    }

    fn log_line(&mut self, line: &str) {
        self.inner.lock().log_line(line);
    }
}
