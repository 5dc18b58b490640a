//! Limpa CLI - normalize names and phone numbers in contact exports.

mod cli;
mod commands;
mod logging;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_flags(
        cli.verbose,
        cli.log_format,
        cli.log_data,
    ));

    let result = match cli.command {
        Commands::Process {
            file,
            output,
            preview_rows,
            dry_run,
            input,
        } => commands::process::run(file, output, preview_rows, dry_run, input),

        Commands::Inspect { file, json, input } => commands::inspect::run(file, json, input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
