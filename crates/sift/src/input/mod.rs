//! Table ingestion: delimited-file parsing and the in-memory table.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{DataTable, SourceMetadata};
