//! Masking of normalized values for on-screen previews.

use serde::{Deserialize, Serialize};

use crate::schema::ColumnRole;

/// Keep a prefix of a value and append a fixed marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskRule {
    /// Number of leading characters left visible.
    pub keep: usize,
    /// Literal appended after the visible prefix.
    pub suffix: String,
}

impl MaskRule {
    pub fn new(keep: usize, suffix: impl Into<String>) -> Self {
        Self {
            keep,
            suffix: suffix.into(),
        }
    }

    /// Mask a value. Shorter values are kept whole, without padding.
    pub fn apply(&self, value: &str) -> String {
        let mut masked: String = value.chars().take(self.keep).collect();
        masked.push_str(&self.suffix);
        masked
    }
}

/// Mask rules per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Applied to name and surname columns.
    pub name: MaskRule,
    /// Applied to phone columns.
    pub phone: MaskRule,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            name: MaskRule::new(3, "XXX"),
            phone: MaskRule::new(5, "XXXX..."),
        }
    }
}

impl MaskConfig {
    /// The rule for a role.
    pub fn rule_for(&self, role: ColumnRole) -> &MaskRule {
        if role.is_personal_name() {
            &self.name
        } else {
            &self.phone
        }
    }

    /// Mask a value by applying the rule of each role in turn.
    pub fn apply(&self, roles: &[ColumnRole], value: &str) -> String {
        roles
            .iter()
            .fold(value.to_string(), |masked, role| self.rule_for(*role).apply(&masked))
    }
}
