mod schema;

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};
use crate::models::{ExpenseRecord, Month};

/// Handle to the expense database file.
///
/// Holds only the path. Every operation opens its own connection and drops it
/// before returning, so nothing stays open between commands.
pub(crate) struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        debug!(path = %self.path.display(), "opening expense database");
        Ok(Connection::open(&self.path)?)
    }

    // ── Schema ────────────────────────────────────────────────

    /// Create any missing month partition. Safe to call on every start.
    pub(crate) fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        for month in Month::ALL {
            tx.execute_batch(&schema::partition_ddl(month.table_name()))?;
        }
        tx.commit()?;
        debug!(partitions = Month::ALL.len(), "schema ensured");
        Ok(())
    }

    /// Names of the partition tables present in the file.
    pub(crate) fn partitions(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let names = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(names
            .into_iter()
            .filter(|name| Month::ALL.iter().any(|m| m.table_name() == name.as_str()))
            .collect())
    }

    pub(crate) fn row_counts(&self) -> Result<Vec<(Month, i64)>> {
        let conn = self.connect()?;
        let mut counts = Vec::with_capacity(Month::ALL.len());
        for month in Month::ALL {
            ensure_partition(&conn, month)?;
            let count: i64 = conn.query_row(
                &format!("SELECT COUNT(*) FROM {}", month.table_name()),
                [],
                |row| row.get(0),
            )?;
            counts.push((month, count));
        }
        Ok(counts)
    }

    // ── Ingestion ─────────────────────────────────────────────

    /// Append `records` to the partition for `month_name`. Never deduplicates.
    pub(crate) fn load(&self, records: &[ExpenseRecord], month_name: &str) -> Result<usize> {
        let month = Month::parse(month_name)
            .ok_or_else(|| TrackerError::InvalidMonth(month_name.to_string()))?;
        let mut conn = self.connect()?;
        ensure_partition(&conn, month)?;

        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(&schema::insert_sql(month.table_name()))?;
            for record in records {
                if record.month != month {
                    warn!(
                        partition = month.table_name(),
                        record_month = %record.month,
                        "record month differs from target partition"
                    );
                }
                stmt.execute(params![
                    record.date.format(schema::DATE_FORMAT).to_string(),
                    record.category,
                    record.payment_mode,
                    record.description,
                    to_real(record.amount_paid)?,
                    to_real(record.cashback)?,
                    record.month.name(),
                ])?;
            }
        }
        tx.commit()?;

        info!(partition = month.table_name(), rows = records.len(), "records loaded");
        Ok(records.len())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Rows of one partition, ascending by date.
    pub(crate) fn query(&self, month_name: &str) -> Result<Vec<ExpenseRecord>> {
        let month = Month::parse(month_name)
            .ok_or_else(|| TrackerError::UnknownPartition(month_name.trim().to_lowercase()))?;
        let conn = self.connect()?;
        ensure_partition(&conn, month)?;
        let records = read_partition(&conn, month, " ORDER BY Date ASC")?;
        debug!(partition = month.table_name(), rows = records.len(), "partition queried");
        Ok(records)
    }

    /// Every partition in calendar order, each in source row order.
    ///
    /// The twelve reads are independent. The first failing partition aborts the
    /// scan with its error.
    pub(crate) fn query_all(&self) -> Result<Vec<ExpenseRecord>> {
        let conn = self.connect()?;
        let mut all = Vec::new();
        for month in Month::ALL {
            let rows = ensure_partition(&conn, month).and_then(|()| read_partition(&conn, month, ""));
            match rows {
                Ok(rows) => all.extend(rows),
                Err(e) => {
                    warn!(
                        partition = month.table_name(),
                        rows_read = all.len(),
                        error = %e,
                        "whole-store query stopped"
                    );
                    return Err(e);
                }
            }
        }
        debug!(rows = all.len(), "all partitions queried");
        Ok(all)
    }
}

fn ensure_partition(conn: &Connection, month: Month) -> Result<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name = ?1)",
        params![month.table_name()],
        |row| row.get(0),
    )?;
    if exists {
        Ok(())
    } else {
        Err(TrackerError::UnknownPartition(month.table_name().to_string()))
    }
}

fn read_partition(conn: &Connection, month: Month, order: &str) -> Result<Vec<ExpenseRecord>> {
    let sql = format!(
        "SELECT {} FROM {}{order}",
        schema::column_list(),
        month.table_name()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], record_from_row)?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    let date_str: String = row.get(0)?;
    let date = NaiveDate::parse_from_str(&date_str, schema::DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;
    let month_str: String = row.get(6)?;
    let month = Month::parse(&month_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            6,
            Type::Text,
            format!("unknown month '{month_str}'").into(),
        )
    })?;
    Ok(ExpenseRecord {
        date,
        category: row.get(1)?,
        payment_mode: row.get(2)?,
        description: row.get(3)?,
        amount_paid: from_real(4, row.get(4)?)?,
        cashback: from_real(5, row.get(5)?)?,
        month,
    })
}

/// REAL columns carry cent amounts; round back to two places on the way out.
fn from_real(idx: usize, value: f64) -> rusqlite::Result<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                Type::Real,
                format!("not a finite amount: {value}").into(),
            )
        })
}

fn to_real(value: Decimal) -> rusqlite::Result<f64> {
    value.to_f64().ok_or_else(|| {
        rusqlite::Error::ToSqlConversionFailure(format!("amount out of range: {value}").into())
    })
}
