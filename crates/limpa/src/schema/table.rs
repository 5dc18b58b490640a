//! Table-level classification of columns into roles.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::types::{ColumnRole, RoleSource};

/// Best-scoring column found by value-based phone detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneDetection {
    /// Header of the winning column.
    pub header: String,
    /// Fraction of its non-empty values that look numeric.
    pub ratio: f64,
}

/// Outcome of classifying every header of a table.
///
/// Every role keeps set semantics: a header in several sets receives every
/// matching normalization. The detected fallback is a single column and is
/// only consulted when no header matched the phone vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Headers matching the name vocabulary.
    pub name_columns: IndexSet<String>,
    /// Headers matching the surname vocabulary.
    pub surname_columns: IndexSet<String>,
    /// Headers matching the phone vocabulary.
    pub phone_columns: IndexSet<String>,
    /// Column inferred to hold phones when no header matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_phone: Option<PhoneDetection>,
}

impl Classification {
    /// Create an empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers whose values receive phone formatting.
    pub fn phone_targets(&self) -> Vec<&str> {
        if !self.phone_columns.is_empty() {
            self.phone_columns.iter().map(String::as_str).collect()
        } else {
            self.fallback_phone
                .iter()
                .map(|d| d.header.as_str())
                .collect()
        }
    }

    /// Roles applied to cells of this header, in application order.
    ///
    /// Name capitalization comes first, then phone formatting. A header can
    /// hold both, e.g. when detection picks a column labeled as names. An
    /// empty list means the column passes through untouched.
    pub fn roles_of(&self, header: &str) -> Vec<ColumnRole> {
        let mut roles = Vec::new();
        if self.name_columns.contains(header) {
            roles.push(ColumnRole::Name);
        }
        if self.surname_columns.contains(header) {
            roles.push(ColumnRole::Surname);
        }
        if self.phone_targets().contains(&header) {
            roles.push(ColumnRole::Phone);
        }
        roles
    }

    /// How the role of this header was decided.
    pub fn source_of(&self, header: &str) -> RoleSource {
        let by_header = self.name_columns.contains(header)
            || self.surname_columns.contains(header)
            || self.phone_columns.contains(header);

        if by_header {
            RoleSource::Header
        } else if self
            .fallback_phone
            .as_ref()
            .is_some_and(|d| d.header == header)
        {
            RoleSource::Detection
        } else {
            RoleSource::None
        }
    }

    /// Returns true if no column will be normalized.
    pub fn is_empty(&self) -> bool {
        self.name_columns.is_empty()
            && self.surname_columns.is_empty()
            && self.phone_columns.is_empty()
            && self.fallback_phone.is_none()
    }
}
