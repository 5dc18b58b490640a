//! Inference of column roles from headers and values.

mod classifier;
mod header;
mod phone;
mod vocabulary;

pub use classifier::ColumnClassifier;
pub use header::normalize_header;
pub use phone::{NUMERIC_THRESHOLD, PhoneColumnDetector, VALUE_DIGIT_RATIO, value_numeric_ratio};
pub use vocabulary::{NAME_HEADERS, PHONE_HEADERS, SURNAME_HEADERS, Vocabulary};
