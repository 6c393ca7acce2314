//! Classifier and aggregator: tags every transaction against the taxonomy and
//! reduces the table to purchase/extra totals and the extra percentage.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{tag_extra_type, ExtraCategory};
use crate::transaction::Transaction;

/// A transaction with its taxonomy tag attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    /// `None` = ordinary purchase
    pub extra_type: Option<ExtraCategory>,
    pub is_purchase: bool,
}

impl ClassifiedTransaction {
    pub fn classify(transaction: Transaction) -> Self {
        let extra_type = tag_extra_type(&transaction.description);
        Self {
            transaction,
            extra_type,
            is_purchase: extra_type.is_none(),
        }
    }

    /// Category label, empty for purchases
    pub fn extra_label(&self) -> &'static str {
        self.extra_type.map(|c| c.label()).unwrap_or("")
    }
}

/// Total extra charges for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraBreakdownRow {
    pub extra_type: ExtraCategory,
    pub total_extra: f64,
}

/// Headline numbers for one statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of debit magnitudes of untagged transactions
    pub purchase_total: f64,
    /// Sum of debit magnitudes of tagged transactions
    pub extra_total: f64,
    /// `extra_total / purchase_total * 100`, or 0 when there were no purchases
    pub extra_pct: f64,
    /// Per-category totals, largest first
    pub extra_breakdown: Vec<ExtraBreakdownRow>,
    /// The input table, in order, with tags attached
    pub transactions: Vec<ClassifiedTransaction>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn breakdown_for(&self, category: ExtraCategory) -> Option<f64> {
        self.extra_breakdown
            .iter()
            .find(|row| row.extra_type == category)
            .map(|row| row.total_extra)
    }
}

/// Classify every transaction and compute the summary.
///
/// Only debit-direction amounts count towards either total; credits and
/// rows without an amount contribute zero. An empty table yields an all-zero
/// summary.
pub fn classify_and_summarize(table: Vec<Transaction>) -> Summary {
    let transactions: Vec<ClassifiedTransaction> =
        table.into_iter().map(ClassifiedTransaction::classify).collect();

    let mut purchase_total = 0.0;
    let mut extra_total = 0.0;
    // Taxonomy order, so the stable sort below breaks ties by declaration order
    let mut groups: Vec<(ExtraCategory, f64)> = Vec::new();

    for t in &transactions {
        if t.transaction.amount.is_none() {
            continue;
        }
        let owed = t.transaction.debit_magnitude();
        match t.extra_type {
            None => purchase_total += owed,
            Some(cat) => {
                extra_total += owed;
                match groups.iter_mut().find(|(c, _)| *c == cat) {
                    Some((_, sum)) => *sum += owed,
                    None => groups.push((cat, owed)),
                }
            }
        }
    }

    groups.sort_by_key(|(cat, _)| cat.rank());
    groups.sort_by(|a, b| b.1.total_cmp(&a.1));

    let extra_pct = if purchase_total > 0.0 {
        extra_total / purchase_total * 100.0
    } else {
        0.0
    };

    Summary {
        purchase_total,
        extra_total,
        extra_pct,
        extra_breakdown: groups
            .into_iter()
            .map(|(extra_type, total_extra)| ExtraBreakdownRow { extra_type, total_extra })
            .collect(),
        transactions,
    }
}
