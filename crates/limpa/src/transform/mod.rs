//! Normalization of classified columns and preview masking.

mod engine;
mod format;
mod mask;
mod operations;

pub use engine::{TableTransformer, TransformOutput, normalize_value};
pub use format::{COUNTRY_CODE, correct_name, format_phone};
pub use mask::{MaskConfig, MaskRule};
pub use operations::{TransformChange, TransformSummary};
