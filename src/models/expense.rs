use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Month;

/// One row of a month partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub category: String,
    pub payment_mode: String,
    pub description: String,
    pub amount_paid: Decimal,
    pub cashback: Decimal,
    pub month: Month,
}

impl ExpenseRecord {
    /// Amount paid minus cashback received.
    pub fn net_amount(&self) -> Decimal {
        self.amount_paid - self.cashback
    }
}
