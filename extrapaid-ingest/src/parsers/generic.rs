//! Layout-agnostic fallback parser.
//!
//! For every line carrying a date and an amount: the first date and the last
//! amount on the line are taken, and whatever text remains is the
//! description. Statements usually print the transaction amount rightmost,
//! but reward points or reference numbers after it will be picked up instead.

use anyhow::Result;
use extrapaid_core::{normalize_amount, normalize_date, Transaction};
use regex::Regex;
use tracing::debug;

use super::layout::{AMOUNT_END, AMOUNT_PATTERN};
use super::{candidate_lines, LineParser, ParseOptions};

#[derive(Debug, Clone)]
pub struct GenericParser {
    date_re: Regex,
    amount_re: Regex,
    credit_re: Regex,
    debit_re: Regex,
    max_line_chars: usize,
}

impl GenericParser {
    pub fn new(opts: &ParseOptions) -> Result<Self> {
        Ok(Self {
            date_re: Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b")?,
            amount_re: Regex::new(&format!(r"(?P<amt>-?\s?{AMOUNT_PATTERN}){AMOUNT_END}"))?,
            credit_re: Regex::new(r"(?i)\b(?:CR|CREDIT)\b")?,
            debit_re: Regex::new(r"(?i)\b(?:DR|DEBIT)\b")?,
            max_line_chars: opts.max_line_chars,
        })
    }

    fn parse_line(&self, line: &str) -> Option<Transaction> {
        let date_m = self.date_re.find(line)?;
        let rest = cut(line, date_m.start(), date_m.end());

        let amt_m = self
            .amount_re
            .captures_iter(&rest)
            .last()
            .and_then(|caps| caps.name("amt"))?;
        let remainder = cut(&rest, amt_m.start(), amt_m.end());
        let description = remainder.trim().to_string();

        let amount = normalize_amount(amt_m.as_str()).map(|a| self.infer_sign(&description, a));

        Some(Transaction::new(
            normalize_date(date_m.as_str()),
            description,
            amount,
        ))
    }

    /// Credit markers force positive, debit markers force negative, otherwise
    /// the amount keeps the sign printed in the text.
    fn infer_sign(&self, description: &str, amount: f64) -> f64 {
        if self.credit_re.is_match(description) {
            amount.abs()
        } else if self.debit_re.is_match(description) {
            -amount.abs()
        } else {
            amount
        }
    }
}

/// Removes `line[start..end]`, leaving a single space at the seam so a marker
/// glued to the removed token (`1,234.56DR`) stays a separate word.
fn cut(line: &str, start: usize, end: usize) -> String {
    format!("{} {}", line[..start].trim_end(), line[end..].trim_start())
}

impl LineParser for GenericParser {
    fn name(&self) -> &'static str {
        "Generic"
    }

    fn parse(&self, text: &str) -> Vec<Transaction> {
        let out: Vec<Transaction> = candidate_lines(text, self.max_line_chars)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| self.parse_line(line))
            .collect();
        debug!(rows = out.len(), "generic parser finished");
        out
    }
}
