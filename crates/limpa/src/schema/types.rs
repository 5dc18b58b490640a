//! Core type definitions for column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalization a column receives.
///
/// A column may carry several roles; they are applied in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Given name(s) of a person.
    Name,
    /// Family name(s) of a person.
    Surname,
    /// Brazilian telephone number.
    Phone,
}

impl ColumnRole {
    /// Returns true if values of this role get name capitalization.
    pub fn is_personal_name(&self) -> bool {
        matches!(self, ColumnRole::Name | ColumnRole::Surname)
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRole::Name => write!(f, "name"),
            ColumnRole::Surname => write!(f, "surname"),
            ColumnRole::Phone => write!(f, "phone"),
        }
    }
}

/// How a column received its role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSource {
    /// The header matched a known vocabulary.
    Header,
    /// Phone role inferred from the column's values; no header matched.
    Detection,
    /// No role assigned.
    #[default]
    None,
}
