//! Canonical slot naming for query templates.
//!
//! Positional `?` markers become `:slot0`, `:slot1`, ... in left-to-right
//! order. Markers that already carry the `:` sigil are left alone and do not
//! consume an ordinal.
//!
//! ```rust
//! use querytrace_core::slots::normalize_slots;
//! use querytrace_core::Surface;
//!
//! let normalized = normalize_slots("SELECT * FROM book WHERE id = ? AND title = :title", Surface::Markup);
//! assert_eq!(normalized.slot_count, 1);
//! assert_eq!(
//!     normalized.sql,
//!     "SELECT * FROM book WHERE id = <b style=\"color:green\">:slot0</b> AND title = :title"
//! );
//! ```

use crate::surface::Surface;

/// Unnamed positional marker.
pub const POSITIONAL_MARKER: char = '?';

/// Sigil that starts every named slot.
pub const SLOT_SIGIL: char = ':';

/// Canonical slot name for an ordinal.
pub fn slot_name(ordinal: usize) -> String {
    format!("{}slot{}", SLOT_SIGIL, ordinal)
}

/// Check if a binding key looks like a named slot.
pub fn is_slot(key: &str) -> bool {
    key.starts_with(SLOT_SIGIL)
}

/// A template with every positional marker replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTemplate {
    /// The rewritten SQL.
    pub sql: String,
    /// Number of ordinals assigned.
    pub slot_count: usize,
}

/// Rewrite positional markers into decorated canonical slots.
pub fn normalize_slots(template: &str, surface: Surface) -> NormalizedTemplate {
    let mut sql = String::with_capacity(template.len());
    let mut slot_count = 0;
    let mut rest = template;

    // Inserted text is never rescanned.
    while let Some(pos) = rest.find(POSITIONAL_MARKER) {
        sql.push_str(&rest[..pos]);
        sql.push_str(&surface.slot(&slot_name(slot_count)));
        slot_count += 1;
        rest = &rest[pos + POSITIONAL_MARKER.len_utf8()..];
    }
    sql.push_str(rest);

    NormalizedTemplate { sql, slot_count }
}
