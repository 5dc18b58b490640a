//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Limpa: normalize names and Brazilian phone numbers in CSV exports
#[derive(Parser)]
#[command(name = "limpa")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, default_value = "compact")]
    pub log_format: LogFormatChoice,

    /// Allow cell values (names, phones) to appear in log output
    #[arg(long, global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a file, show a masked preview and export the result
    Process {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: processado_<file> next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of masked rows to preview
        #[arg(long, default_value = "10")]
        preview_rows: usize,

        /// Don't write the export, only preview
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Show how each column would be classified
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        input: InputArgs,
    },
}

/// Options shared by every command that reads a file.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// Field delimiter (e.g. ',', ';', tab); auto-detected when omitted
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Treat the first line as a header row instead of labeling columns by position
    #[arg(long)]
    pub has_header: bool,

    /// JSON file with custom header vocabularies ({"name": [..], "surname": [..], "phone": [..]})
    #[arg(long, value_name = "JSON")]
    pub vocabulary: Option<PathBuf>,

    /// Minimum share of numeric-looking values for an unlabeled phone column
    #[arg(long, default_value = "0.7")]
    pub threshold: f64,
}

#[derive(Clone, Copy, Debug, Default)]
pub enum LogFormatChoice {
    Pretty,
    #[default]
    Compact,
    Json,
}

impl std::str::FromStr for LogFormatChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormatChoice::Pretty),
            "compact" => Ok(LogFormatChoice::Compact),
            "json" => Ok(LogFormatChoice::Json),
            _ => Err(format!(
                "Unknown log format: {}. Use pretty, compact, or json.",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormatChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatChoice::Pretty => write!(f, "pretty"),
            LogFormatChoice::Compact => write!(f, "compact"),
            LogFormatChoice::Json => write!(f, "json"),
        }
    }
}
