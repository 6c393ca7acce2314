//! Declarative bank row layouts.
//!
//! All supported banks print `DATE DESCRIPTION AMOUNT MARKER` or
//! `DATE DESCRIPTION MARKER AMOUNT`, differing only in marker position and
//! the date separators they use. A `LineLayout` captures those two facts and
//! compiles to one anchored-per-line pattern.

use anyhow::Result;
use extrapaid_core::{normalize_amount, normalize_date, Transaction};
use regex::Regex;
use tracing::debug;

use super::{candidate_lines, LineParser, ParseOptions};

/// Amount with optional `,` grouping (western or lakh style) and up to two decimals
pub(crate) const AMOUNT_PATTERN: &str = r"(?:\d{1,3}(?:,\d{2,3})+|\d+)(?:\.\d{1,2})?";

/// Follows an amount: anything but another digit. Kept outside the amount
/// group so `345.50INR` or `1,234.56DR` still capture the decimals.
pub(crate) const AMOUNT_END: &str = r"(?:\D|$)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPosition {
    /// `... 345.00 DR`
    AfterAmount,
    /// `... Dr 345.00`
    BeforeAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout {
    /// Characters allowed between day, month and year
    pub date_separators: &'static str,
    pub marker: MarkerPosition,
}

impl LineLayout {
    pub const fn new(date_separators: &'static str, marker: MarkerPosition) -> Self {
        Self { date_separators, marker }
    }

    /// Regex source for this layout, with `date`, `desc`, `amt` and `dc` groups.
    pub fn pattern(&self) -> String {
        let seps: String = self
            .date_separators
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let date = format!(r"\d{{1,2}}[{seps}]\d{{1,2}}[{seps}]\d{{2,4}}");

        match self.marker {
            MarkerPosition::AfterAmount => format!(
                r"(?i)\b(?P<date>{date})\s+(?P<desc>.+?)\s+(?P<amt>{AMOUNT_PATTERN})\s*(?P<dc>DR|CR)\b"
            ),
            MarkerPosition::BeforeAmount => format!(
                r"(?i)\b(?P<date>{date})\s+(?P<desc>.+?)\s+(?P<dc>DR|CR)\s+(?P<amt>{AMOUNT_PATTERN}){AMOUNT_END}"
            ),
        }
    }
}

/// Parser for one bank's fixed row layout
#[derive(Debug, Clone)]
pub struct LayoutParser {
    name: &'static str,
    row_re: Regex,
    max_line_chars: usize,
}

impl LayoutParser {
    pub fn new(name: &'static str, layout: LineLayout, opts: &ParseOptions) -> Result<Self> {
        Ok(Self {
            name,
            row_re: Regex::new(&layout.pattern())?,
            max_line_chars: opts.max_line_chars,
        })
    }

    fn parse_line(&self, line: &str) -> Option<Transaction> {
        let caps = self.row_re.captures(line)?;

        // DR → owed (negative), CR → returned (positive)
        let magnitude = normalize_amount(&caps["amt"]).map(f64::abs);
        let amount = if caps["dc"].eq_ignore_ascii_case("DR") {
            magnitude.map(|a| -a)
        } else {
            magnitude
        };

        Some(Transaction::new(
            normalize_date(&caps["date"]),
            caps["desc"].trim(),
            amount,
        ))
    }
}

impl LineParser for LayoutParser {
    fn name(&self) -> &'static str {
        self.name
    }

    fn parse(&self, text: &str) -> Vec<Transaction> {
        let out: Vec<Transaction> = candidate_lines(text, self.max_line_chars)
            .filter_map(|line| self.parse_line(line))
            .collect();
        debug!(parser = self.name, rows = out.len(), "layout parser finished");
        out
    }
}
