//! CLI command implementations.

pub mod inspect;
pub mod process;

use limpa::input::parse_delimiter;
use limpa::{HeaderMode, LimpaConfig, ParserConfig, Vocabulary};

use crate::cli::InputArgs;

/// Build the engine configuration from the shared input flags.
pub fn build_config(
    input: &InputArgs,
    preview_rows: Option<usize>,
) -> Result<LimpaConfig, Box<dyn std::error::Error>> {
    if !(0.0..=1.0).contains(&input.threshold) {
        return Err(format!(
            "Threshold must be between 0 and 1, got {}",
            input.threshold
        )
        .into());
    }

    let delimiter = input
        .delimiter
        .as_deref()
        .map(parse_delimiter)
        .transpose()?;

    let vocabulary = match &input.vocabulary {
        Some(path) => Vocabulary::load(path)?,
        None => Vocabulary::default(),
    };

    let mut config = LimpaConfig {
        parser: ParserConfig {
            delimiter,
            header_mode: if input.has_header {
                HeaderMode::FirstRow
            } else {
                HeaderMode::Positional
            },
            ..ParserConfig::default()
        },
        vocabulary,
        numeric_threshold: input.threshold,
        ..LimpaConfig::default()
    };
    if let Some(rows) = preview_rows {
        config.preview_rows = rows;
    }

    Ok(config)
}
