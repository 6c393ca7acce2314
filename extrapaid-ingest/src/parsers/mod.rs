//! Line parsers and dispatch.
//!
//! Every parser scans the statement text one line at a time; a line that
//! does not match contributes nothing. The selected bank parser runs first
//! and the generic parser takes over when it finds no rows at all.

pub mod generic;
pub mod layout;

use anyhow::Result;
use extrapaid_core::Transaction;
use tracing::{debug, info, warn};

use crate::bank::Bank;
pub use generic::GenericParser;
pub use layout::{LayoutParser, LineLayout, MarkerPosition};

/// Uniform contract for bank-specific and generic parsers
pub trait LineParser: Send + Sync {
    fn name(&self) -> &'static str;

    /// Parse statement text into transactions in line order.
    /// Never fails; malformed lines are skipped.
    fn parse(&self, text: &str) -> Vec<Transaction>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Lines longer than this are skipped before any matching
    pub max_line_chars: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_line_chars: 1000 }
    }
}

/// Transactions plus which parser produced them
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub transactions: Vec<Transaction>,
    pub parser: &'static str,
    /// True when the bank parser found nothing and the generic parser ran
    pub used_fallback: bool,
}

/// Build the parser for a bank, or the generic parser when no bank is given.
pub fn parser_for(bank: Option<Bank>, opts: &ParseOptions) -> Result<Box<dyn LineParser>> {
    let parser: Box<dyn LineParser> = match bank {
        Some(bank) => Box::new(LayoutParser::new(bank.display_name(), bank.layout(), opts)?),
        None => Box::new(GenericParser::new(opts)?),
    };
    Ok(parser)
}

/// Parse a whole statement with the selected bank's parser, falling back to
/// the generic parser when the bank parser yields zero rows.
///
/// The returned table may be empty; deciding that an empty table is a
/// failure is left to the caller. Errors only come from pattern compilation.
pub fn parse_statement(text: &str, bank: Option<Bank>, opts: &ParseOptions) -> Result<ParseOutcome> {
    let primary = parser_for(bank, opts)?;
    let transactions = primary.parse(text);
    debug!(parser = primary.name(), rows = transactions.len(), "statement parsed");

    if !transactions.is_empty() || bank.is_none() {
        if transactions.is_empty() {
            warn!(parser = primary.name(), "no transactions found");
        }
        return Ok(ParseOutcome {
            transactions,
            parser: primary.name(),
            used_fallback: false,
        });
    }

    info!(parser = primary.name(), "no rows matched the bank layout, trying generic parser");
    let fallback = GenericParser::new(opts)?;
    let transactions = fallback.parse(text);
    debug!(parser = fallback.name(), rows = transactions.len(), "statement parsed");
    if transactions.is_empty() {
        warn!("no transactions found by bank or generic parser");
    }

    Ok(ParseOutcome {
        transactions,
        parser: fallback.name(),
        used_fallback: true,
    })
}

/// Lines worth matching: over-long lines are dropped up front.
pub(crate) fn candidate_lines(text: &str, max_chars: usize) -> impl Iterator<Item = &str> {
    text.lines().filter(move |line| {
        if line.chars().count() > max_chars {
            debug!(len = line.len(), "skipping over-long line");
            return false;
        }
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SBI_TEXT: &str = "\
STATEMENT OF ACCOUNT
12/09/2025 AMAZON *Mktplace  1,234.56 DR
15/09/2025 PAYMENT RECEIVED 5,000.00 CR
";

    #[test]
    fn test_bank_parser_used_when_it_matches() {
        let out = parse_statement(SBI_TEXT, Some(Bank::Sbi), &ParseOptions::default()).unwrap();
        assert_eq!(out.parser, "SBI");
        assert!(!out.used_fallback);
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(out.transactions[0].amount, Some(-1234.56));
        assert_eq!(out.transactions[1].amount, Some(5000.0));
    }

    #[test]
    fn test_falls_back_to_generic() {
        // IDFC expects the marker before the amount and '-' dates
        let out = parse_statement(SBI_TEXT, Some(Bank::IdfcFirst), &ParseOptions::default()).unwrap();
        assert_eq!(out.parser, "Generic");
        assert!(out.used_fallback);
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(out.transactions[0].amount, Some(-1234.56));
        assert_eq!(out.transactions[1].amount, Some(5000.0));
    }

    #[test]
    fn test_fallback_may_also_be_empty() {
        let out = parse_statement("nothing to see here\n", Some(Bank::Axis), &ParseOptions::default())
            .unwrap();
        assert!(out.used_fallback);
        assert!(out.transactions.is_empty());
    }

    #[test]
    fn test_no_bank_goes_straight_to_generic() {
        let out = parse_statement(SBI_TEXT, None, &ParseOptions::default()).unwrap();
        assert_eq!(out.parser, "Generic");
        assert!(!out.used_fallback);
        assert_eq!(out.transactions.len(), 2);
    }

    #[test]
    fn test_over_long_lines_skipped() {
        let long = format!("12/09/2025 {} 10.00 DR", "X".repeat(2000));
        let text = format!("{long}\n13/09/2025 SWIGGY 250.00 DR\n");
        let out = parse_statement(&text, Some(Bank::Sbi), &ParseOptions::default()).unwrap();
        assert_eq!(out.transactions.len(), 1);
        assert_eq!(out.transactions[0].description, "SWIGGY");
    }

    #[test]
    fn test_parser_for_names() {
        let opts = ParseOptions::default();
        assert_eq!(parser_for(Some(Bank::Kotak), &opts).unwrap().name(), "Kotak");
        assert_eq!(parser_for(None, &opts).unwrap().name(), "Generic");
    }
}
