//! QueryTrace CLI - Command-line interface for rendering SQL traces.

use clap::Parser;

use querytrace_cli::cli::{Cli, Command};
use querytrace_cli::commands;
use querytrace_cli::error::CliResult;

fn main() {
    querytrace_core::init_logging();

    // Run the CLI and handle errors
    if let Err(e) = run() {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the appropriate command
    match cli.command {
        Command::Render(args) => commands::render::run(args),
        Command::Replay(args) => commands::replay::run(args),
        Command::Config(args) => commands::config::run(args),
    }
}
