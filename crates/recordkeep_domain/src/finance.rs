//! Finance records.

use chrono::NaiveDate;
use recordkeep_core::{Entity, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spending transaction.
///
/// Amounts are stored in cents to avoid floating point rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: RecordId,
    date: NaiveDate,
    amount_cents: i64,
    category: String,
}

impl Transaction {
    /// Creates a transaction.
    pub fn new(
        id: impl Into<RecordId>,
        date: NaiveDate,
        amount_cents: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            amount_cents,
            category: category.into(),
        }
    }

    /// Date the transaction took place.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Amount in cents.
    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    /// Spending category, e.g. "Groceries".
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Entity for Transaction {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction ID: {}, Date: {}, Amount: {}, Category: {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            format_cents(self.amount_cents),
            self.category
        )
    }
}

/// Formats cents as a dollar amount, e.g. `-1250` as `-$12.50`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_amount_and_date() {
        let tx = Transaction::new(
            1,
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            15050,
            "Groceries",
        );
        assert_eq!(
            tx.to_string(),
            "Transaction ID: 1, Date: 2025-01-05, Amount: $150.50, Category: Groceries"
        );
    }

    #[test]
    fn format_cents_handles_sign_and_padding() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(7), "$0.07");
        assert_eq!(format_cents(-1250), "-$12.50");
    }
}
