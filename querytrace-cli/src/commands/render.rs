//! `querytrace render` command - Render one query with its bindings.

use querytrace_core::{Bindings, QueryLogger, Surface, normalize_slots};

use super::{build_logger, parse_bindings, print_last};
use crate::cli::RenderArgs;
use crate::error::CliResult;
use crate::output;

/// Run the render command
pub fn run(args: RenderArgs) -> CliResult<()> {
    let (mut logger, muted) = build_logger(&args.options)?;

    if args.literal {
        logger.log_line(&args.sql);
    } else {
        let bindings = parse_bindings(&args.bindings)?;
        warn_unbound_markers(&args.sql, &bindings);
        logger.log_query(&args.sql, &bindings);
    }

    if !muted {
        print_last(&logger, &mut std::io::stdout().lock())?;
    }
    Ok(())
}

fn warn_unbound_markers(sql: &str, bindings: &Bindings) {
    let markers = normalize_slots(sql, Surface::Markup).slot_count;
    let positional = bindings.keys().filter(|key| key.is_numeric()).count();

    if positional < markers {
        output::warn(&format!(
            "{} of {} positional markers have no binding",
            markers - positional,
            markers
        ));
    }
}
