//! Reporting of what a transform changed.

use serde::{Deserialize, Serialize};

use crate::schema::ColumnRole;

/// Normalization applied to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformChange {
    /// Column affected.
    pub column: String,

    /// Roles that drove the normalization, in application order.
    pub roles: Vec<ColumnRole>,

    /// Number of cells whose value differs after normalization.
    pub values_changed: usize,
}

impl TransformChange {
    /// Get a human-readable description of the change.
    pub fn description(&self) -> String {
        let capitalized = self.roles.iter().any(ColumnRole::is_personal_name);
        let formatted = self.roles.contains(&ColumnRole::Phone);
        let action = match (capitalized, formatted) {
            (true, true) => "Capitalized and formatted",
            (true, false) => "Capitalized",
            (false, true) => "Formatted",
            (false, false) => "Kept",
        };
        let roles: Vec<String> = self.roles.iter().map(ToString::to_string).collect();

        format!(
            "{} '{}' as {} ({} values changed)",
            action,
            self.column,
            roles.join(" + "),
            self.values_changed
        )
    }
}

/// Summary of a whole-table transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformSummary {
    /// Number of data rows processed.
    pub rows: usize,

    /// One entry per normalized column, in column order.
    pub changes: Vec<TransformChange>,
}

impl TransformSummary {
    /// Create an empty summary.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            changes: Vec::new(),
        }
    }

    /// Add a change to the summary.
    pub fn add_change(&mut self, change: TransformChange) {
        self.changes.push(change);
    }

    /// Total number of cells modified across all columns.
    pub fn values_changed(&self) -> usize {
        self.changes.iter().map(|c| c.values_changed).sum()
    }
}
