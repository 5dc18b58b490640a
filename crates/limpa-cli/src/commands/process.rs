//! Process command - normalize a file, preview it masked, export the result.

use std::path::PathBuf;

use colored::Colorize;
use limpa::{CsvExporter, Limpa, export_file_name};
use tracing::{debug, info};

use crate::cli::InputArgs;
use crate::logging::redact_value;
use crate::render;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    preview_rows: usize,
    dry_run: bool,
    input: InputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::build_config(&input, Some(preview_rows))?;
    let limpa = Limpa::with_config(config);

    println!("{} {}", "Processing".cyan().bold(), file.display());
    let result = limpa.process(&file)?;

    println!(
        "  {} {} rows, {} columns ({})",
        "Read".green(),
        result.source.row_count,
        result.source.column_count,
        result.source.format
    );

    let classification = &result.classification;
    if classification.is_empty() {
        println!(
            "  {} no name, surname or phone columns recognized; values pass through unchanged",
            "Note:".yellow()
        );
    }
    if let Some(detection) = &classification.fallback_phone {
        println!(
            "  {} '{}' looks like a phone column ({:.0}% numeric); formatting it as phones",
            "Detected".yellow(),
            detection.header,
            detection.ratio * 100.0
        );
    }
    for change in &result.summary.changes {
        println!("  {}", change.description());
    }

    if let Some(first) = result.full.rows.first() {
        for (header, value) in result.full.headers.iter().zip(first) {
            if !classification.roles_of(header).is_empty() {
                debug!(column = %header, value = redact_value(value), "first normalized value");
            }
        }
    }

    println!();
    println!("{}", "Preview (masked):".yellow().bold());
    println!("{}", render::preview_table(&result.preview, classification));
    if let Some(note) = render::truncation_note(result.preview.row_count(), result.full.row_count())
    {
        println!("{}", note.dimmed());
    }
    println!();

    if dry_run {
        println!("{}", "Dry run - no file written.".yellow());
        return Ok(());
    }

    let output_path = output.unwrap_or_else(|| export_file_name(&file));
    CsvExporter::new().write_file(&result.full, &output_path)?;
    info!(path = %output_path.display(), rows = result.full.row_count(), "export written");

    println!("{} {}", "Exported to".green().bold(), output_path.display());

    Ok(())
}
