//! Per-column classification profile.

use serde::{Deserialize, Serialize};

use super::types::{ColumnRole, RoleSource};

/// Value statistics gathered while scoring a column for phone detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnScore {
    /// Values that are non-empty after trimming.
    pub non_empty: usize,
    /// Non-empty values whose digit ratio meets the per-value cut-off.
    pub numeric_like: usize,
}

impl ColumnScore {
    /// Fraction of non-empty values that look numeric (0 for an empty column).
    pub fn ratio(&self) -> f64 {
        if self.non_empty == 0 {
            0.0
        } else {
            self.numeric_like as f64 / self.non_empty as f64
        }
    }
}

/// How one column was classified, for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Header as found in the table.
    pub header: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Header after case and diacritic folding.
    pub normalized_header: String,
    /// Roles the transformer will apply, in order (empty when untouched).
    pub roles: Vec<ColumnRole>,
    /// Where the role came from.
    pub source: RoleSource,
    /// Phone-likeness of the column's values.
    pub score: ColumnScore,
}
