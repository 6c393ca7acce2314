use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One statement line-item, bank-agnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// `None` when the date token could not be parsed
    pub date: Option<NaiveDate>,
    pub description: String,
    /// Negative = debit (purchase, fee); positive = credit (payment, refund).
    /// `None` when the amount token could not be parsed.
    pub amount: Option<f64>,
}

impl Transaction {
    pub fn new(date: Option<NaiveDate>, description: impl Into<String>, amount: Option<f64>) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    /// Returns true if this is a debit (negative amount)
    pub fn is_debit(&self) -> bool {
        self.amount.is_some_and(|a| a < 0.0)
    }

    /// Returns true if this is a credit (positive amount)
    pub fn is_credit(&self) -> bool {
        self.amount.is_some_and(|a| a > 0.0)
    }

    /// Magnitude owed by the cardholder: `max(0, -amount)`, zero for credits
    /// and unknown amounts.
    pub fn debit_magnitude(&self) -> f64 {
        self.amount.map(|a| (-a).max(0.0)).unwrap_or(0.0)
    }
}
