//! extrapaid-report: the end-to-end analysis pipeline plus export and
//! display formatting for its results.

pub mod analysis;
pub mod export;
pub mod fmt;

pub use analysis::{analyze_pdf, analyze_text, Analysis, AnalyzeError};
pub use export::{export_csv, export_json, ExportPaths};
