//! Writing normalized tables back to disk.

mod export;

pub use export::{CsvExporter, EXPORT_PREFIX, export_file_name};
