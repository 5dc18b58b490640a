//! Inspect command - show how each column would be classified.

use std::path::PathBuf;

use colored::Colorize;
use limpa::Limpa;

use crate::cli::InputArgs;
use crate::render;

pub fn run(
    file: PathBuf,
    json_output: bool,
    input: InputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::build_config(&input, None)?;
    let report = Limpa::with_config(config).inspect(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Columns in".cyan().bold(),
        report.source.file.white()
    );
    println!(
        "  {} data rows, format {}",
        report.source.row_count, report.source.format
    );
    println!();
    println!("{}", render::columns_table(&report.columns));

    let targets = report.classification.phone_targets();
    if targets.is_empty() {
        println!("{}", "No phone column found.".yellow());
    } else {
        println!("Phone columns: {}", targets.join(", ").green());
    }

    Ok(())
}
