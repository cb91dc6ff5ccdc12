//! # QueryTrace
//!
//! Readable, fully-substituted SQL traces from parameterized queries.
//!
//! QueryTrace sits next to a database layer and turns each executed
//! statement and its bound values into the SQL a human would have written:
//! - Positional `?` markers and `:name` placeholders filled with SQL literals
//! - Long values cut off with a visible marker
//! - ANSI colors on a terminal, inline-styled markup everywhere else
//! - Schema changes highlighted
//! - A per-logger buffer of every trace for inspection in tests
//!
//! ## Quick Start
//!
//! ```rust
//! use querytrace::prelude::*;
//!
//! let mut logger = DebugLogger::new()
//!     .with_probe(FixedProbe::interactive())
//!     .with_target(OutputTarget::writer(MemoryWriter::new()));
//!
//! logger.log(
//!     "SELECT * FROM book WHERE author = :author AND year > :year",
//!     Some(&bindings! { ":author" => "Herbert", ":year" => 1960 }),
//! );
//!
//! assert_eq!(
//!     logger.grep("Herbert"),
//!     ["SELECT * FROM book WHERE author = 'Herbert' AND year > 1960"]
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use querytrace_core::*;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use querytrace_core::prelude::*;
}
