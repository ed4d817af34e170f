use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::ExpenseRecord;

const HEADER: [&str; 7] = [
    "Date",
    "Category",
    "Payment_Mode",
    "Description",
    "Amount_Paid",
    "Cashback",
    "Month",
];

/// Write records as CSV with the partition column names as header.
pub(crate) fn write_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for r in records {
        wtr.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.category.clone(),
            r.payment_mode.clone(),
            r.description.clone(),
            format!("{:.2}", r.amount_paid),
            format!("{:.2}", r.cashback),
            r.month.name().to_string(),
        ])?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(records.len())
}

pub(crate) fn export_to_path(records: &[ExpenseRecord], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(records, file)
}
