//! Column classification by header vocabulary with a value-based phone fallback.

use tracing::{debug, warn};

use super::header::normalize_header;
use super::phone::PhoneColumnDetector;
use super::vocabulary::Vocabulary;
use crate::input::DataTable;
use crate::schema::{Classification, ColumnProfile};

/// Assigns name, surname and phone roles to the columns of a table.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier {
    vocabulary: Vocabulary,
    detector: PhoneColumnDetector,
}

impl ColumnClassifier {
    /// Create a classifier with the default vocabulary and threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            detector: PhoneColumnDetector::new(),
        }
    }

    /// Replace the phone detector (e.g. to change its threshold).
    pub fn with_detector(mut self, detector: PhoneColumnDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Classify every column of the table.
    ///
    /// Each header is tested against every vocabulary. Value-based detection
    /// only runs when no header matched the phone vocabulary.
    pub fn classify(&self, table: &DataTable) -> Classification {
        let mut classification = Classification::new();

        for header in &table.headers {
            let normalized = normalize_header(header);

            let is_name = self.vocabulary.is_name(&normalized);
            let is_surname = self.vocabulary.is_surname(&normalized);
            let is_phone = self.vocabulary.is_phone(&normalized);

            if [is_name, is_surname, is_phone].iter().filter(|m| **m).count() > 1 {
                warn!(
                    column = %header,
                    "header matches more than one vocabulary; every matching normalization is applied"
                );
            }

            if is_name {
                classification.name_columns.insert(header.clone());
            }
            if is_surname {
                classification.surname_columns.insert(header.clone());
            }
            if is_phone {
                classification.phone_columns.insert(header.clone());
            }

            debug!(column = %header, normalized = %normalized, is_name, is_surname, is_phone, "header classified");
        }

        if classification.phone_columns.is_empty() {
            classification.fallback_phone = self.detector.detect(table);
            match &classification.fallback_phone {
                Some(detection) => debug!(
                    column = %detection.header,
                    ratio = detection.ratio,
                    "phone column detected from values"
                ),
                None => debug!("no phone column detected"),
            }
        }

        classification
    }

    /// Classify the table and describe every column.
    pub fn profile(&self, table: &DataTable) -> (Classification, Vec<ColumnProfile>) {
        let classification = self.classify(table);

        let profiles = table
            .headers
            .iter()
            .enumerate()
            .map(|(position, header)| ColumnProfile {
                header: header.clone(),
                position,
                normalized_header: normalize_header(header),
                roles: classification.roles_of(header),
                source: classification.source_of(header),
                score: self.detector.score_column(table, position),
            })
            .collect();

        (classification, profiles)
    }
}
