//! CSV/TSV parser with delimiter detection and positional header labels.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, SourceMetadata};
use crate::error::{LimpaError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// UTF-8 byte order mark.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// How column headers are obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderMode {
    /// Every line is data; columns are labeled by position
    /// ("nome", "telefone", then "coluna N").
    #[default]
    Positional,
    /// The first line holds the headers.
    FirstRow,
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Where headers come from.
    pub header_mode: HeaderMode,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            header_mode: HeaderMode::Positional,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited text files into a [`DataTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let io_err = |e| LimpaError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let size_bytes = file.metadata().map_err(io_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_bytes(&contents)?;

        let format = match table.delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            file = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            format = %format,
            "parsed source file"
        );

        let source_metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, source_metadata))
    }

    /// Parse in-memory bytes, detecting the delimiter when none is configured.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            if is_blank_record(&record) {
                continue;
            }
            records.push(record.iter().map(|s| s.to_string()).collect::<Vec<String>>());
        }

        let mut records = records.into_iter();

        let headers = match self.config.header_mode {
            HeaderMode::FirstRow => records
                .next()
                .ok_or_else(|| LimpaError::EmptyData("No header row found".to_string()))?,
            HeaderMode::Positional => {
                let width = records.as_slice().first().map(Vec::len).unwrap_or(0);
                positional_headers(width)
            }
        };

        if headers.is_empty() {
            return Err(LimpaError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let limit = self.config.max_rows.unwrap_or(usize::MAX);

        let rows: Vec<Vec<String>> = records
            .take(limit)
            .map(|mut row| {
                row.resize(expected_cols, String::new());
                row
            })
            .collect();

        if rows.is_empty() {
            return Err(LimpaError::EmptyData("No data rows found".to_string()));
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Header labels for a file without a header row.
///
/// The first column is assumed to hold names and the second phones; the rest
/// are labeled by their 1-based position.
pub fn positional_headers(width: usize) -> Vec<String> {
    (0..width)
        .map(|i| match i {
            0 => "nome".to_string(),
            1 => "telefone".to_string(),
            _ => format!("coluna {}", i + 1),
        })
        .collect()
}

/// Parse a delimiter given on the command line or in configuration.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        "comma" => Ok(b','),
        "semicolon" => Ok(b';'),
        "pipe" => Ok(b'|'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        other => Err(LimpaError::InvalidDelimiter(format!(
            "'{}' is not a single ASCII character",
            other
        ))),
    }
}

/// An empty line. Rows of empty cells (e.g. `,`) are data and are kept.
fn is_blank_record(record: &csv::StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record[0].is_empty())
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LimpaError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let variance =
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64;

        // Higher count with lower variance wins; tab breaks ties since it rarely appears in data
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        let data = b"ana;11987654321\nbeto;21987654321";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_positional_headers() {
        assert_eq!(
            positional_headers(4),
            vec!["nome", "telefone", "coluna 3", "coluna 4"]
        );
        assert_eq!(positional_headers(1), vec!["nome"]);
        assert!(positional_headers(0).is_empty());
    }

    #[test]
    fn test_parse_positional_treats_first_line_as_data() {
        let parser = Parser::new();
        let table = parser
            .parse_bytes(b"maria silva,11 98765-4321,sp\njose,2187654321,rj")
            .unwrap();

        assert_eq!(table.headers, vec!["nome", "telefone", "coluna 3"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("maria silva"));
    }

    #[test]
    fn test_parse_first_row_headers() {
        let parser = Parser::with_config(ParserConfig {
            header_mode: HeaderMode::FirstRow,
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"Nome,Celular\nAna,11987654321").unwrap();

        assert_eq!(table.headers, vec!["Nome", "Celular"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_parse_pads_and_truncates_rows() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: Some(b','),
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"a,b,c\nd\ne,f,g,h").unwrap();

        assert_eq!(table.rows[1], vec!["d", "", ""]);
        assert_eq!(table.rows[2], vec!["e", "f", "g"]);
    }

    #[test]
    fn test_parse_strips_bom_and_skips_blank_lines() {
        let parser = Parser::new();
        let table = parser
            .parse_bytes(b"\xEF\xBB\xBFana,1187654321\n\n\nbia,2187654321\n")
            .unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("ana"));
        assert_eq!(table.get(1, 0), Some("bia"));
    }

    #[test]
    fn test_parse_keeps_rows_of_empty_cells() {
        let parser = Parser::new();
        let table = parser
            .parse_bytes(b"ana,1187654321\n,\nbia,2187654321\n")
            .unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[1], vec!["", ""]);
        assert_eq!(table.get(2, 0), Some("bia"));
    }

    #[test]
    fn test_parse_empty_input_is_an_error() {
        let parser = Parser::new();
        assert!(matches!(
            parser.parse_bytes(b"\n\n"),
            Err(LimpaError::EmptyData(_))
        ));
    }

    #[test]
    fn test_parse_delimiter_names() {
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert!(parse_delimiter(";;").is_err());
    }
}
