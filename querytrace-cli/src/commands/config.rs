//! `querytrace config` command - Print the resolved configuration.

use super::resolve_config;
use crate::cli::ConfigArgs;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the config command
pub fn run(args: ConfigArgs) -> CliResult<()> {
    let config = resolve_config(&args.options)?;

    if args.toml {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    output::section("Trace Configuration");
    kv("max_value_length", &config.max_value_length.to_string());
    kv("force_string_binding", &config.force_string_binding.to_string());
    kv(
        "override_interactive_output",
        &config.override_interactive_output.to_string(),
    );
    kv("muted", &config.muted.to_string());
    output::newline();

    match &args.options.config {
        Some(path) => output::dim(&format!("Loaded from {}", path.display())),
        None => output::dim("No config file loaded"),
    }
    Ok(())
}
