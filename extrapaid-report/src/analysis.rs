//! Statement text → transaction table → summary.

use extrapaid_core::{classify_and_summarize, Summary};
use extrapaid_ingest::{extract_text, parse_statement, Bank, ExtractError, ParseOptions};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Neither the bank parser nor the generic parser found a single row
    #[error("no transactions found")]
    NoTransactions,
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Parse(#[from] anyhow::Error),
}

/// Summary of one statement plus how it was parsed
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub bank: Option<Bank>,
    pub parser: &'static str,
    pub used_fallback: bool,
    pub summary: Summary,
}

/// Analyze already-extracted statement text.
///
/// Returns `AnalyzeError::NoTransactions` when nothing could be parsed, so a
/// statement with no extra charges stays distinguishable from a statement
/// that could not be read.
pub fn analyze_text(text: &str, bank: Option<Bank>, opts: &ParseOptions) -> Result<Analysis, AnalyzeError> {
    let outcome = parse_statement(text, bank, opts)?;
    if outcome.transactions.is_empty() {
        return Err(AnalyzeError::NoTransactions);
    }

    let summary = classify_and_summarize(outcome.transactions);
    info!(
        parser = outcome.parser,
        rows = summary.transactions.len(),
        purchase_total = summary.purchase_total,
        extra_total = summary.extra_total,
        "statement analyzed"
    );

    Ok(Analysis {
        bank,
        parser: outcome.parser,
        used_fallback: outcome.used_fallback,
        summary,
    })
}

/// Extract text from a statement PDF and analyze it.
pub fn analyze_pdf(bytes: &[u8], bank: Option<Bank>, opts: &ParseOptions) -> Result<Analysis, AnalyzeError> {
    let text = extract_text(bytes)?;
    analyze_text(&text, bank, opts)
}
