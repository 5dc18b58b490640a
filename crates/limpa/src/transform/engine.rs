//! Whole-table normalization and preview masking.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::format::{correct_name, format_phone};
use super::mask::MaskConfig;
use super::operations::{TransformChange, TransformSummary};
use crate::inference::ColumnClassifier;
use crate::input::DataTable;
use crate::schema::{Classification, ColumnRole};

/// Result of transforming a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformOutput {
    /// Roles that drove the transform.
    pub classification: Classification,
    /// Every row with name and phone columns normalized.
    pub full: DataTable,
    /// `full` with classified columns masked.
    pub preview: DataTable,
    /// Per-column change counts.
    pub summary: TransformSummary,
}

/// Classifies a table and produces its normalized and masked forms.
///
/// The source table is never modified; both outputs are fresh tables with the
/// same headers in the same order.
#[derive(Debug, Clone, Default)]
pub struct TableTransformer {
    classifier: ColumnClassifier,
    masks: MaskConfig,
}

impl TableTransformer {
    /// Create a transformer with default vocabulary, threshold and masks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer around a configured classifier.
    pub fn with_classifier(classifier: ColumnClassifier) -> Self {
        Self {
            classifier,
            masks: MaskConfig::default(),
        }
    }

    /// Replace the preview mask rules.
    pub fn with_masks(mut self, masks: MaskConfig) -> Self {
        self.masks = masks;
        self
    }

    /// The classifier in use.
    pub fn classifier(&self) -> &ColumnClassifier {
        &self.classifier
    }

    /// Classify the table, then normalize and mask it.
    pub fn transform(&self, table: &DataTable) -> TransformOutput {
        let classification = self.classifier.classify(table);
        self.apply(table, classification)
    }

    /// Normalize and mask the table using an existing classification.
    pub fn apply(&self, table: &DataTable, classification: Classification) -> TransformOutput {
        let roles: Vec<Vec<ColumnRole>> = table
            .headers
            .iter()
            .map(|h| classification.roles_of(h))
            .collect();

        let (full, summary) = normalize_table(table, &roles);
        let preview = self.mask_table(&full, &roles);

        info!(
            rows = summary.rows,
            columns = summary.changes.len(),
            values_changed = summary.values_changed(),
            "table normalized"
        );

        TransformOutput {
            classification,
            full,
            preview,
            summary,
        }
    }

    fn mask_table(&self, full: &DataTable, roles: &[Vec<ColumnRole>]) -> DataTable {
        let rows: Vec<Vec<String>> = full
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(roles)
                    .map(|(value, column_roles)| self.masks.apply(column_roles, value))
                    .collect()
            })
            .collect();

        DataTable::new(full.headers.clone(), rows, full.delimiter)
    }
}

/// Normalize one cell by applying each role's formatter in turn.
pub fn normalize_value(roles: &[ColumnRole], value: &str) -> String {
    roles
        .iter()
        .fold(value.to_string(), |current, role| match role {
            ColumnRole::Name | ColumnRole::Surname => correct_name(&current),
            ColumnRole::Phone => format_phone(&current),
        })
}

fn normalize_table(table: &DataTable, roles: &[Vec<ColumnRole>]) -> (DataTable, TransformSummary) {
    let mut changed = vec![0usize; roles.len()];

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(roles)
                .enumerate()
                .map(|(idx, (value, column_roles))| {
                    let normalized = normalize_value(column_roles, value);
                    if normalized != *value {
                        changed[idx] += 1;
                    }
                    normalized
                })
                .collect()
        })
        .collect();

    let mut summary = TransformSummary::new(table.row_count());
    for ((header, column_roles), values_changed) in table.headers.iter().zip(roles).zip(changed) {
        if !column_roles.is_empty() {
            debug!(column = %header, roles = ?column_roles, values_changed, "column normalized");
            summary.add_change(TransformChange {
                column: header.clone(),
                roles: column_roles.clone(),
                values_changed,
            });
        }
    }

    (
        DataTable::new(table.headers.clone(), rows, table.delimiter),
        summary,
    )
}
