//! Limpa: name and Brazilian phone normalization for loosely labeled tables.
//!
//! Tabular exports rarely declare what their columns mean. Limpa recognizes
//! name, surname and phone columns from their headers, falls back to sampling
//! values when no header says "phone", and normalizes what it finds.
//!
//! # Core Principles
//!
//! - **Never fails on data**: values it cannot canonicalize are kept as given
//! - **Non-destructive**: the source table is never modified
//! - **Privacy-aware previews**: displayed rows are masked after normalization
//!
//! # Example
//!
//! ```no_run
//! use limpa::{CsvExporter, Limpa};
//!
//! let limpa = Limpa::new();
//! let result = limpa.process("contatos.csv").unwrap();
//!
//! println!("Rows: {}", result.full.row_count());
//! CsvExporter::new().write_file(&result.full, "processado_contatos.csv").unwrap();
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod output;
pub mod schema;
pub mod transform;

mod limpa;

pub use crate::limpa::{DEFAULT_PREVIEW_ROWS, InspectResult, Limpa, LimpaConfig, ProcessResult};
pub use error::{LimpaError, Result};
pub use inference::{ColumnClassifier, PhoneColumnDetector, Vocabulary, normalize_header};
pub use input::{DataTable, HeaderMode, Parser, ParserConfig, SourceMetadata};
pub use output::{CsvExporter, export_file_name};
pub use schema::{Classification, ColumnProfile, ColumnRole, PhoneDetection, RoleSource};
pub use transform::{
    MaskConfig, MaskRule, TableTransformer, TransformOutput, correct_name, format_phone,
};
