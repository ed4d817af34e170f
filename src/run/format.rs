use rust_decimal::Decimal;

use crate::models::ExpenseRecord;
use crate::report::{CategoryShare, Summary};

const DESCRIPTION_WIDTH: usize = 26;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Pie-style label, e.g. `"33.3%"`.
pub(crate) fn percent_label(percent: Decimal) -> String {
    format!("{percent:.1}%")
}

pub(crate) fn records_table(records: &[ExpenseRecord]) -> String {
    let mut out = format!(
        "{:<10}  {:<16}  {:<11}  {:<DESCRIPTION_WIDTH$}  {:>10}  {:>8}  {}\n",
        "Date", "Category", "Payment", "Description", "Amount", "Cashback", "Month"
    );
    out.push_str(&"─".repeat(100));
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{:<10}  {:<16}  {:<11}  {:<DESCRIPTION_WIDTH$}  {:>10}  {:>8}  {}\n",
            r.date.format("%Y-%m-%d").to_string(),
            truncate(&r.category, 16),
            truncate(&r.payment_mode, 11),
            truncate(&r.description, DESCRIPTION_WIDTH),
            format_amount(r.amount_paid),
            format_amount(r.cashback),
            r.month,
        ));
    }
    out
}

pub(crate) fn shares_table(shares: &[CategoryShare]) -> String {
    let mut out = format!("{:<18}  {:>12}  {:>7}\n", "Category", "Amount Paid", "Share");
    out.push_str(&"─".repeat(41));
    out.push('\n');
    for s in shares {
        out.push_str(&format!(
            "{:<18}  {:>12}  {:>7}\n",
            truncate(&s.category, 18),
            format_amount(s.total),
            percent_label(s.percent),
        ));
    }
    out
}

pub(crate) fn summary_lines(summary: &Summary) -> String {
    format!(
        "  Records:    {}\n  Spent:      {}\n  Cashback:   {}\n  Net:        {}\n",
        summary.count,
        format_amount(summary.spent),
        format_amount(summary.cashback),
        format_amount(summary.net),
    )
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
