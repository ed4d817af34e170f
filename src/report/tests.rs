#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::generate::Generator;
use crate::models::{Catalog, Month};

fn make_record(category: &str, amount: Decimal, cashback: Decimal) -> ExpenseRecord {
    ExpenseRecord {
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        category: category.into(),
        payment_mode: "Wallet".into(),
        description: "Mobile recharge".into(),
        amount_paid: amount,
        cashback,
        month: Month::January,
    }
}

// ── aggregate_by_category ─────────────────────────────────────

#[test]
fn test_aggregate_empty() {
    assert!(aggregate_by_category(&[]).is_empty());
}

#[test]
fn test_aggregate_single_category_exact() {
    let records = vec![
        make_record("Food", dec!(10.10), dec!(5.00)),
        make_record("Food", dec!(20.20), dec!(0.00)),
        make_record("Food", dec!(0.01), dec!(19.99)),
        make_record("Food", dec!(499.99), dec!(1.00)),
    ];
    let totals = aggregate_by_category(&records);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals["Food"], dec!(530.30));
}

#[test]
fn test_aggregate_excludes_cashback() {
    let records = vec![
        make_record("Bills", dec!(100.00), dec!(20.00)),
        make_record("Travel", dec!(50.00), dec!(20.00)),
        make_record("Bills", dec!(25.50), dec!(20.00)),
    ];
    let totals = aggregate_by_category(&records);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals["Bills"], dec!(125.50));
    assert_eq!(totals["Travel"], dec!(50.00));
}

#[test]
fn test_aggregate_matches_generated_sum() {
    let batch = Generator::new(Catalog::STANDARD, StdRng::seed_from_u64(8))
        .generate("December", 200)
        .unwrap();
    let totals = aggregate_by_category(&batch);
    let grand: Decimal = totals.values().copied().sum();
    let expected: Decimal = batch.iter().map(|r| r.amount_paid).sum();
    assert_eq!(grand, expected);
    assert!(totals.keys().all(|k| Catalog::STANDARD.categories.contains(&k.as_str())));
}

// ── category_shares ───────────────────────────────────────────

#[test]
fn test_shares_empty() {
    assert!(category_shares(&CategoryTotals::new()).is_empty());
}

#[test]
fn test_shares_percentages() {
    let records = vec![
        make_record("Food", dec!(75.00), Decimal::ZERO),
        make_record("Dining", dec!(25.00), Decimal::ZERO),
    ];
    let shares = category_shares(&aggregate_by_category(&records));
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].category, "Food");
    assert_eq!(shares[0].percent, dec!(75.0));
    assert_eq!(shares[1].category, "Dining");
    assert_eq!(shares[1].percent, dec!(25.0));
}

#[test]
fn test_shares_rounding() {
    let records = vec![
        make_record("Food", dec!(10.00), Decimal::ZERO),
        make_record("Bills", dec!(10.00), Decimal::ZERO),
        make_record("Travel", dec!(10.00), Decimal::ZERO),
    ];
    let shares = category_shares(&aggregate_by_category(&records));
    assert!(shares.iter().all(|s| s.percent == dec!(33.3)));
    // Equal totals fall back to name order.
    let names: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(names, vec!["Bills", "Food", "Travel"]);
}

#[test]
fn test_shares_zero_total() {
    let mut totals = CategoryTotals::new();
    totals.insert("Food".into(), Decimal::ZERO);
    let shares = category_shares(&totals);
    assert_eq!(shares[0].percent, Decimal::ZERO);
}

// ── summarize ─────────────────────────────────────────────────

#[test]
fn test_summarize() {
    let records = vec![
        make_record("Food", dec!(100.00), dec!(5.00)),
        make_record("Bills", dec!(40.25), dec!(0.25)),
    ];
    let summary = summarize(&records);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.spent, dec!(140.25));
    assert_eq!(summary.cashback, dec!(5.25));
    assert_eq!(summary.net, dec!(135.00));
}

#[test]
fn test_summarize_empty() {
    assert_eq!(summarize(&[]), Summary::default());
}
