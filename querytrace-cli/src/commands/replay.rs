//! `querytrace replay` command - Render every query in a JSON Lines file.

use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use querytrace_core::{Bindings, DebugLogger, QueryLogger};

use super::{build_logger, print_last};
use crate::cli::ReplayArgs;
use crate::error::{CliError, CliResult};

/// One recorded query.
#[derive(Debug)]
pub struct ReplayEntry {
    /// SQL template
    pub sql: String,

    /// Bindings from a JSON array (positional) or object (keyed).
    /// Any other value, or none at all, logs the SQL as a literal line.
    pub bindings: Option<Bindings>,
}

#[derive(Deserialize)]
struct RawEntry {
    sql: String,
    #[serde(default)]
    bindings: Option<Value>,
}

/// Parse one line of a replay file. Blank lines yield `None`.
pub fn parse_entry(line_number: usize, line: &str) -> CliResult<Option<ReplayEntry>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let replay_error = |e: serde_json::Error| CliError::Replay {
        line: line_number,
        message: e.to_string(),
    };

    let raw: RawEntry = serde_json::from_str(line).map_err(replay_error)?;
    let bindings = match raw.bindings {
        Some(value @ (Value::Array(_) | Value::Object(_))) => {
            Some(serde_json::from_value(value).map_err(replay_error)?)
        }
        _ => None,
    };

    Ok(Some(ReplayEntry {
        sql: raw.sql,
        bindings,
    }))
}

/// Run the replay command
pub fn run(args: ReplayArgs) -> CliResult<()> {
    let (mut logger, muted) = build_logger(&args.options)?;

    let reader: Box<dyn BufRead> = if args.file.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(&args.file)?))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, line) in reader.lines().enumerate() {
        let Some(entry) = parse_entry(index + 1, &line?)? else {
            continue;
        };
        replay_entry(&mut logger, &entry);
        if !muted {
            print_last(&logger, &mut out)?;
        }
    }
    Ok(())
}

fn replay_entry(logger: &mut DebugLogger, entry: &ReplayEntry) {
    logger.log(&entry.sql, entry.bindings.as_ref());
}
