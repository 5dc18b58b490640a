//! Main Limpa struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::inference::{ColumnClassifier, NUMERIC_THRESHOLD, PhoneColumnDetector, Vocabulary};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::schema::{Classification, ColumnProfile};
use crate::transform::{MaskConfig, TableTransformer, TransformSummary};

/// Default number of preview rows shown to the user.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Configuration for a Limpa run.
#[derive(Debug, Clone)]
pub struct LimpaConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Header vocabularies for name, surname and phone columns.
    pub vocabulary: Vocabulary,
    /// Minimum column score for value-based phone detection.
    pub numeric_threshold: f64,
    /// Preview mask rules.
    pub masks: MaskConfig,
    /// Rows kept in the preview handed to renderers.
    pub preview_rows: usize,
}

impl Default for LimpaConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            vocabulary: Vocabulary::default(),
            numeric_threshold: NUMERIC_THRESHOLD,
            masks: MaskConfig::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Result of processing a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Roles assigned to the columns.
    pub classification: Classification,
    /// The normalized table, ready for export.
    pub full: DataTable,
    /// Masked rows for display, capped at the configured preview size.
    pub preview: DataTable,
    /// Per-column change counts.
    pub summary: TransformSummary,
}

impl ProcessResult {
    /// Returns true if the preview holds fewer rows than the full table.
    pub fn preview_truncated(&self) -> bool {
        self.preview.row_count() < self.full.row_count()
    }
}

/// Result of inspecting a data file without transforming it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Roles assigned to the columns.
    pub classification: Classification,
    /// One profile per column, in column order.
    pub columns: Vec<ColumnProfile>,
}

/// The main Limpa engine: read, classify, normalize.
pub struct Limpa {
    config: LimpaConfig,
    parser: Parser,
    transformer: TableTransformer,
}

impl Limpa {
    /// Create a Limpa instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(LimpaConfig::default())
    }

    /// Create a Limpa instance with custom configuration.
    pub fn with_config(config: LimpaConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let classifier = ColumnClassifier::with_vocabulary(config.vocabulary.clone())
            .with_detector(PhoneColumnDetector::with_threshold(config.numeric_threshold));
        let transformer =
            TableTransformer::with_classifier(classifier).with_masks(config.masks.clone());

        Self {
            config,
            parser,
            transformer,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &LimpaConfig {
        &self.config
    }

    /// Read a file, normalize it and build the preview.
    pub fn process(&self, path: impl AsRef<Path>) -> Result<ProcessResult> {
        let (table, source) = self.parser.parse_file(path)?;
        Ok(self.process_table(table, source))
    }

    /// Normalize an already parsed table.
    pub fn process_table(&self, table: DataTable, source: SourceMetadata) -> ProcessResult {
        let output = self.transformer.transform(&table);

        info!(
            file = %source.file,
            rows = table.row_count(),
            values_changed = output.summary.values_changed(),
            "file processed"
        );

        ProcessResult {
            source,
            classification: output.classification,
            preview: output.preview.head(self.config.preview_rows),
            full: output.full,
            summary: output.summary,
        }
    }

    /// Read a file and report how each column would be classified.
    pub fn inspect(&self, path: impl AsRef<Path>) -> Result<InspectResult> {
        let (table, source) = self.parser.parse_file(path)?;
        let (classification, columns) = self.transformer.classifier().profile(&table);

        Ok(InspectResult {
            source,
            classification,
            columns,
        })
    }
}

impl Default for Limpa {
    fn default() -> Self {
        Self::new()
    }
}
