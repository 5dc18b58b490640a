//! CSV export of normalized tables.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LimpaError, Result};
use crate::input::DataTable;

/// Prefix added to the input file name for the default export path.
pub const EXPORT_PREFIX: &str = "processado_";

/// UTF-8 byte order mark, so spreadsheet tools pick the right encoding.
const BOM: &str = "\u{FEFF}";

/// Default export path: `processado_<file name>` next to the input.
pub fn export_file_name(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dados.csv".to_string());
    input.with_file_name(format!("{}{}", EXPORT_PREFIX, name))
}

/// Writes tables as comma-separated values with a header row.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    with_bom: bool,
}

impl CsvExporter {
    /// Comma-delimited, CRLF-terminated, with a leading byte order mark.
    pub fn new() -> Self {
        Self { with_bom: true }
    }

    /// Enable or disable the leading byte order mark.
    pub fn with_bom(mut self, with_bom: bool) -> Self {
        self.with_bom = with_bom;
        self
    }

    /// Write the table to any writer.
    pub fn write<W: Write>(&self, table: &DataTable, mut writer: W) -> Result<()> {
        if self.with_bom {
            writer
                .write_all(BOM.as_bytes())
                .map_err(csv::Error::from)?;
        }

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);

        csv_writer.write_record(&table.headers)?;
        for row in &table.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;

        Ok(())
    }

    /// Serialize the table to a string.
    pub fn to_csv_string(&self, table: &DataTable) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(table, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| LimpaError::Config(format!("Export is not valid UTF-8: {}", e)))
    }

    /// Write the table to a file, creating parent directories as needed.
    pub fn write_file(&self, table: &DataTable, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |e| LimpaError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = File::create(path).map_err(io_err)?;
        self.write(table, BufWriter::new(file))?;

        debug!(file = %path.display(), rows = table.row_count(), "export written");
        Ok(())
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
