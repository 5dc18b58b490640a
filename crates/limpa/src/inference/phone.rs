//! Value-based detection of an unlabeled telephone column.
//!
//! Scoring is two-staged. A value is numeric-like when at least
//! [`VALUE_DIGIT_RATIO`] of its non-whitespace characters are digits, which
//! tolerates formatting such as `(11) 98765-4321`. A column's score is the
//! share of its non-empty values that are numeric-like. Free-text columns that
//! merely contain the odd number stay well below the column threshold.

use tracing::debug;

use crate::input::DataTable;
use crate::schema::{ColumnScore, PhoneDetection};

/// Minimum column score for a detection to be accepted.
pub const NUMERIC_THRESHOLD: f64 = 0.70;

/// Minimum digit ratio for a single value to count as numeric-like.
pub const VALUE_DIGIT_RATIO: f64 = 0.70;

/// Fraction of a value's non-whitespace characters that are ASCII digits.
///
/// Returns 0 when the value has no non-whitespace characters.
pub fn value_numeric_ratio(value: &str) -> f64 {
    let no_spaces_len = value.chars().filter(|c| !c.is_whitespace()).count();
    if no_spaces_len == 0 {
        return 0.0;
    }
    let digit_len = value.chars().filter(|c| c.is_ascii_digit()).count();
    digit_len as f64 / no_spaces_len as f64
}

/// Picks the column whose values look most like telephone numbers.
#[derive(Debug, Clone)]
pub struct PhoneColumnDetector {
    threshold: f64,
}

impl PhoneColumnDetector {
    /// Create a detector with the default threshold.
    pub fn new() -> Self {
        Self {
            threshold: NUMERIC_THRESHOLD,
        }
    }

    /// Create a detector with a custom acceptance threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The acceptance threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score a single column by index.
    pub fn score_column(&self, table: &DataTable, col_index: usize) -> ColumnScore {
        let mut score = ColumnScore::default();

        for value in table.column_values(col_index) {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            score.non_empty += 1;
            if value_numeric_ratio(trimmed) >= VALUE_DIGIT_RATIO {
                score.numeric_like += 1;
            }
        }

        score
    }

    /// The strictly best-scoring column, regardless of threshold.
    ///
    /// Ties keep the first column seen. Columns scoring 0 never win.
    pub fn best(&self, table: &DataTable) -> Option<PhoneDetection> {
        let mut best: Option<PhoneDetection> = None;
        let mut best_ratio = 0.0;

        for (idx, header) in table.headers.iter().enumerate() {
            let ratio = self.score_column(table, idx).ratio();
            debug!(column = %header, ratio, "phone detection score");

            if ratio > best_ratio {
                best_ratio = ratio;
                best = Some(PhoneDetection {
                    header: header.clone(),
                    ratio,
                });
            }
        }

        best
    }

    /// The best column, if its score reaches the threshold.
    pub fn detect(&self, table: &DataTable) -> Option<PhoneDetection> {
        self.best(table).filter(|d| d.ratio >= self.threshold)
    }
}

impl Default for PhoneColumnDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A two-column table whose second column holds `numeric` phone-like
    /// values followed by free text up to `total` rows.
    fn mixed_table(numeric: usize, total: usize) -> DataTable {
        let rows: Vec<Vec<String>> = (0..total)
            .map(|i| {
                let contact = if i < numeric {
                    format!("(11) 9{:04}-{:04}", i, i)
                } else {
                    "ligar depois".to_string()
                };
                vec![format!("pessoa {}", i), contact]
            })
            .collect();
        DataTable::new(vec!["cliente".into(), "contato".into()], rows, b',')
    }

    #[test]
    fn test_value_numeric_ratio() {
        assert_eq!(value_numeric_ratio("11987654321"), 1.0);
        assert_eq!(value_numeric_ratio("   "), 0.0);
        assert_eq!(value_numeric_ratio(""), 0.0);
        // 11 digits out of 14 non-space characters
        let ratio = value_numeric_ratio("(11) 98765-4321");
        assert!((ratio - 11.0 / 14.0).abs() < 1e-9);
        assert!(value_numeric_ratio("rua 7") < VALUE_DIGIT_RATIO);
    }

    #[test]
    fn test_accepts_column_at_75_percent() {
        let table = mixed_table(15, 20);
        let detection = PhoneColumnDetector::new().detect(&table).unwrap();

        assert_eq!(detection.header, "contato");
        assert!((detection.ratio - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_column_at_65_percent() {
        let table = mixed_table(13, 20);
        let detector = PhoneColumnDetector::new();

        assert!(detector.detect(&table).is_none());
        let best = detector.best(&table).unwrap();
        assert!((best.ratio - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_empty_values_do_not_count() {
        let table = DataTable::from_rows(
            &["a"],
            &[&["11987654321"], &[""], &["  "], &["21987654321"]],
        );
        let score = PhoneColumnDetector::new().score_column(&table, 0);

        assert_eq!(score.non_empty, 2);
        assert_eq!(score.numeric_like, 2);
        assert_eq!(score.ratio(), 1.0);
    }

    #[test]
    fn test_all_empty_or_text_columns_never_win() {
        let table = DataTable::from_rows(&["vazio", "texto"], &[&["", "abc"], &["", "def"]]);
        assert!(PhoneColumnDetector::new().best(&table).is_none());
    }

    #[test]
    fn test_first_column_wins_ties() {
        let table = DataTable::from_rows(
            &["fixo", "celular2"],
            &[&["3133334444", "11987654321"]],
        );
        let detection = PhoneColumnDetector::new().detect(&table).unwrap();
        assert_eq!(detection.header, "fixo");
    }

    #[test]
    fn test_custom_threshold() {
        let table = mixed_table(13, 20);
        let detection = PhoneColumnDetector::with_threshold(0.6).detect(&table);
        assert_eq!(detection.map(|d| d.header), Some("contato".to_string()));
    }
}
