//! Fixed extra-charge taxonomy.
//!
//! Keyword matching is a case-insensitive substring test against the
//! uppercased description. Categories are tried in declaration order and the
//! first hit wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of charge that are overhead rather than a purchase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExtraCategory {
    #[serde(rename = "Late/Overlimit Fee")]
    LateOverlimitFee,
    #[serde(rename = "Interest/Finance Charge")]
    InterestFinanceCharge,
    #[serde(rename = "GST on Charges")]
    GstOnCharges,
    #[serde(rename = "Annual/Joining/Renewal Fee")]
    AnnualJoiningRenewalFee,
    #[serde(rename = "Forex Markup Fee")]
    ForexMarkupFee,
}

impl ExtraCategory {
    /// Display label, also used as the export column value
    pub fn label(&self) -> &'static str {
        match self {
            ExtraCategory::LateOverlimitFee => "Late/Overlimit Fee",
            ExtraCategory::InterestFinanceCharge => "Interest/Finance Charge",
            ExtraCategory::GstOnCharges => "GST on Charges",
            ExtraCategory::AnnualJoiningRenewalFee => "Annual/Joining/Renewal Fee",
            ExtraCategory::ForexMarkupFee => "Forex Markup Fee",
        }
    }

    /// Uppercase keyword substrings for this category
    pub fn keywords(&self) -> &'static [&'static str] {
        TAXONOMY
            .iter()
            .find(|(cat, _)| cat == self)
            .map(|(_, keys)| *keys)
            .unwrap_or(&[])
    }

    /// Position in the taxonomy; used as a stable tie-breaker
    pub fn rank(&self) -> usize {
        TAXONOMY
            .iter()
            .position(|(cat, _)| cat == self)
            .unwrap_or(TAXONOMY.len())
    }
}

impl fmt::Display for ExtraCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered (category, keywords) table. Read-only; lookup order is this order.
pub const TAXONOMY: &[(ExtraCategory, &[&str])] = &[
    (
        ExtraCategory::LateOverlimitFee,
        &["LATE FEE", "LATE PAYMENT", "PAST DUE", "OVERLIMIT"],
    ),
    (
        ExtraCategory::InterestFinanceCharge,
        &["INTEREST", "FINANCE CHARGE", "RETAIL INTEREST", "CASH INTEREST"],
    ),
    (
        ExtraCategory::GstOnCharges,
        &["GST", "CGST", "SGST", "IGST", "INTEGRATED GST", "CENTRAL GST", "STATE GST"],
    ),
    (
        ExtraCategory::AnnualJoiningRenewalFee,
        &["ANNUAL FEE", "JOINING FEE", "RENEWAL FEE", "MEMBERSHIP FEE"],
    ),
    (
        ExtraCategory::ForexMarkupFee,
        &["MARKUP", "CROSS CURRENCY", "INTERNATIONAL TRANSACTION FEE"],
    ),
];

/// Tag a description with its extra-charge category, or `None` for an
/// ordinary purchase.
pub fn tag_extra_type(description: &str) -> Option<ExtraCategory> {
    let desc = description.to_uppercase();
    TAXONOMY
        .iter()
        .find(|(_, keys)| keys.iter().any(|k| desc.contains(*k)))
        .map(|(cat, _)| *cat)
}
