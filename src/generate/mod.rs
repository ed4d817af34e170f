use chrono::NaiveDate;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::Decimal;
use std::ops::RangeInclusive;
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{Catalog, ExpenseRecord, Month};

/// Records produced per generate command.
pub(crate) const DEFAULT_BATCH_SIZE: usize = 51;

pub(crate) const YEAR: i32 = 2024;

/// Upper bound for generated days, valid in every month.
pub(crate) const LAST_DAY: u32 = 28;

// Amounts are drawn in whole cents.
const AMOUNT_CENTS: RangeInclusive<i64> = 1_000..=50_000;
const CASHBACK_CENTS: RangeInclusive<i64> = 0..=2_000;

/// Synthesizes expense records for one month from a catalog and a random source.
pub(crate) struct Generator<R> {
    catalog: Catalog,
    rng: R,
}

impl Generator<ThreadRng> {
    pub(crate) fn standard() -> Self {
        Self::new(Catalog::STANDARD, rand::rng())
    }
}

impl<R: Rng> Generator<R> {
    pub(crate) fn new(catalog: Catalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// Generate `count` records dated within days 1..=28 of `month_name` in 2024.
    pub(crate) fn generate(&mut self, month_name: &str, count: usize) -> Result<Vec<ExpenseRecord>> {
        let month = Month::parse(month_name)
            .ok_or_else(|| TrackerError::InvalidMonth(month_name.to_string()))?;

        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.record(month)?);
        }
        debug!(month = %month, count = records.len(), "batch generated");
        Ok(records)
    }

    fn record(&mut self, month: Month) -> Result<ExpenseRecord> {
        let day = self.rng.random_range(1..=LAST_DAY);
        let date = NaiveDate::from_ymd_opt(YEAR, month.number(), day)
            .ok_or_else(|| TrackerError::InvalidMonth(month.name().to_string()))?;

        let category = pick(self.catalog.categories, &mut self.rng, "categories")?;
        let payment_mode = pick(self.catalog.payment_modes, &mut self.rng, "payment modes")?;
        let description = pick(self.catalog.descriptions, &mut self.rng, "descriptions")?;

        Ok(ExpenseRecord {
            date,
            category,
            payment_mode,
            description,
            amount_paid: Decimal::new(self.rng.random_range(AMOUNT_CENTS), 2),
            cashback: Decimal::new(self.rng.random_range(CASHBACK_CENTS), 2),
            month,
        })
    }
}

fn pick<R: Rng>(items: &[&str], rng: &mut R, what: &'static str) -> Result<String> {
    items
        .choose(rng)
        .map(|s| s.to_string())
        .ok_or(TrackerError::EmptyCatalog(what))
}
