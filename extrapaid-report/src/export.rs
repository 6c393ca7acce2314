//! Export artifact: one CSV per sheet (`Summary`, `Extra_Breakdown`,
//! `Transactions`) in a single directory, plus an optional JSON dump.

use anyhow::{Context, Result};
use extrapaid_core::Summary;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analysis::Analysis;

pub const SUMMARY_SHEET: &str = "Summary";
pub const BREAKDOWN_SHEET: &str = "Extra_Breakdown";
pub const TRANSACTIONS_SHEET: &str = "Transactions";

const SUMMARY_COLUMNS: [&str; 3] = ["Purchase Total (₹)", "EXTRA Total (₹)", "EXTRA %"];
const BREAKDOWN_COLUMNS: [&str; 2] = ["extra_type", "total_extra"];
const TRANSACTION_COLUMNS: [&str; 5] = ["date", "description", "amount", "extra_type", "is_purchase"];

/// Files written by [`export_csv`] / [`export_json`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPaths {
    pub summary: PathBuf,
    pub breakdown: PathBuf,
    pub transactions: PathBuf,
    pub json: Option<PathBuf>,
}

#[derive(Serialize)]
struct SummaryRow {
    purchase_total: f64,
    extra_total: f64,
    extra_pct: f64,
}

#[derive(Serialize)]
struct BreakdownRow<'a> {
    extra_type: &'a str,
    total_extra: f64,
}

#[derive(Serialize)]
struct TransactionRow<'a> {
    date: String,
    description: &'a str,
    amount: Option<f64>,
    extra_type: &'a str,
    is_purchase: bool,
}

/// Write the three sheets as `<dir>/<Sheet>.csv`, creating `dir` if needed.
pub fn export_csv(summary: &Summary, dir: &Path) -> Result<ExportPaths> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

    let summary_path = sheet_path(dir, SUMMARY_SHEET);
    write_sheet(
        &summary_path,
        &SUMMARY_COLUMNS,
        [SummaryRow {
            purchase_total: summary.purchase_total,
            extra_total: summary.extra_total,
            extra_pct: summary.extra_pct,
        }],
    )?;

    let breakdown_path = sheet_path(dir, BREAKDOWN_SHEET);
    write_sheet(
        &breakdown_path,
        &BREAKDOWN_COLUMNS,
        summary.extra_breakdown.iter().map(|row| BreakdownRow {
            extra_type: row.extra_type.label(),
            total_extra: row.total_extra,
        }),
    )?;

    let transactions_path = sheet_path(dir, TRANSACTIONS_SHEET);
    write_sheet(
        &transactions_path,
        &TRANSACTION_COLUMNS,
        summary.transactions.iter().map(|t| TransactionRow {
            date: t.transaction.date.map(|d| d.to_string()).unwrap_or_default(),
            description: &t.transaction.description,
            amount: t.transaction.amount,
            extra_type: t.extra_label(),
            is_purchase: t.is_purchase,
        }),
    )?;

    debug!(dir = %dir.display(), "wrote csv export");
    Ok(ExportPaths {
        summary: summary_path,
        breakdown: breakdown_path,
        transactions: transactions_path,
        json: None,
    })
}

/// Write the whole analysis as pretty-printed JSON.
pub fn export_json(analysis: &Analysis, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(analysis).context("serialize analysis")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn sheet_path(dir: &Path, sheet: &str) -> PathBuf {
    dir.join(format!("{sheet}.csv"))
}

/// Header is written explicitly so empty sheets still carry their columns.
fn write_sheet<R: Serialize>(path: &Path, columns: &[&str], rows: impl IntoIterator<Item = R>) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;

    wtr.write_record(columns)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
