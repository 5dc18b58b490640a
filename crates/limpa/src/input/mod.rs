//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{HeaderMode, Parser, ParserConfig, parse_delimiter, positional_headers};
pub use source::{DataTable, SourceMetadata};
