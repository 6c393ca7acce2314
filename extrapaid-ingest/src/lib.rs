//! extrapaid-ingest: statement text ingestion, bank-specific line parsers and
//! the generic fallback parser.

pub mod bank;
pub mod parsers;
pub mod pdf;

pub use bank::{Bank, UnknownBank};
pub use parsers::{parse_statement, parser_for, LineParser, ParseOptions, ParseOutcome};
pub use pdf::{extract_text, ExtractError};
