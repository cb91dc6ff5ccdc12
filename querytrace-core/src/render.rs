//! Rendering of bound values as SQL literals.
//!
//! ```rust
//! use querytrace_core::{Binding, ParamType, TraceConfig, ValueRenderer};
//!
//! let renderer = ValueRenderer::new(&TraceConfig::default());
//!
//! assert_eq!(renderer.render(&Binding::new("42")), "42");
//! assert_eq!(renderer.render(&Binding::new("abc")), "'abc'");
//! assert_eq!(renderer.render(&Binding::null()), "NULL");
//! assert_eq!(renderer.render(&Binding::typed(7, ParamType::String)), "'7'");
//! ```

use std::borrow::Cow;

use crate::config::TraceConfig;
use crate::value::{Binding, BoundValue, IntegerProbe, NULL_LITERAL, ParamType, can_be_treated_as_int};

/// Appended to a value that was cut off.
pub const ELLIPSIS: &str = "... ";

/// Turns bindings into printable SQL literals.
#[derive(Debug, Clone, Copy)]
pub struct ValueRenderer {
    max_value_length: usize,
    force_string_binding: bool,
    is_integer: IntegerProbe,
}

impl ValueRenderer {
    /// Create a renderer from a configuration snapshot.
    pub fn new(config: &TraceConfig) -> Self {
        Self {
            max_value_length: config.max_value_length,
            force_string_binding: config.force_string_binding,
            is_integer: can_be_treated_as_int,
        }
    }

    /// Replace the integer predicate used for type inference.
    pub fn with_integer_probe(mut self, probe: IntegerProbe) -> Self {
        self.is_integer = probe;
        self
    }

    /// Render a binding.
    pub fn render(&self, binding: &Binding) -> String {
        self.render_value(&binding.value, binding.param_type)
    }

    /// Render a value with an optional explicit type.
    pub fn render_value(&self, value: &BoundValue, param_type: Option<ParamType>) -> String {
        if value.is_null() {
            return NULL_LITERAL.to_string();
        }

        let text = value.to_text();
        let param_type = self.effective_type(&text, param_type);
        let text = truncate(&text, self.max_value_length);

        match param_type {
            ParamType::String => format!("'{}'", text),
            ParamType::Integer => text.into_owned(),
        }
    }

    /// Resolve the type a value renders as.
    pub fn effective_type(&self, text: &str, param_type: Option<ParamType>) -> ParamType {
        if self.force_string_binding {
            return ParamType::String;
        }
        if let Some(param_type) = param_type {
            return param_type;
        }
        if (self.is_integer)(text) || text == NULL_LITERAL {
            ParamType::Integer
        } else {
            ParamType::String
        }
    }
}

impl Default for ValueRenderer {
    fn default() -> Self {
        Self::new(&TraceConfig::default())
    }
}

/// Cut `text` after `max` characters and mark the cut.
fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        Some((end, _)) => Cow::Owned(format!("{}{}", &text[..end], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}
