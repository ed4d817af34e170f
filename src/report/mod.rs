use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::ExpenseRecord;

/// Category → summed amount paid.
pub(crate) type CategoryTotals = BTreeMap<String, Decimal>;

/// Sum `amount_paid` per category. Cashback is not included.
pub(crate) fn aggregate_by_category(records: &[ExpenseRecord]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for record in records {
        *totals.entry(record.category.clone()).or_default() += record.amount_paid;
    }
    totals
}

/// One slice of a proportional (pie-style) breakdown.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryShare {
    pub(crate) category: String,
    pub(crate) total: Decimal,
    /// Share of the grand total, rounded to one decimal place.
    pub(crate) percent: Decimal,
}

/// Turn totals into percentage shares, largest first.
pub(crate) fn category_shares(totals: &CategoryTotals) -> Vec<CategoryShare> {
    let grand_total: Decimal = totals.values().copied().sum();
    let mut shares: Vec<CategoryShare> = totals
        .iter()
        .map(|(category, total)| CategoryShare {
            category: category.clone(),
            total: *total,
            percent: if grand_total.is_zero() {
                Decimal::ZERO
            } else {
                (*total * Decimal::ONE_HUNDRED / grand_total).round_dp(1)
            },
        })
        .collect();
    shares.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    shares
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Summary {
    pub(crate) count: usize,
    pub(crate) spent: Decimal,
    pub(crate) cashback: Decimal,
    pub(crate) net: Decimal,
}

pub(crate) fn summarize(records: &[ExpenseRecord]) -> Summary {
    records.iter().fold(Summary::default(), |mut s, r| {
        s.count += 1;
        s.spent += r.amount_paid;
        s.cashback += r.cashback;
        s.net += r.net_amount();
        s
    })
}

#[cfg(test)]
mod tests;
