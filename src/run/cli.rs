use anyhow::Result;
use std::path::PathBuf;

use super::format;
use crate::db::ExpenseStore;
use crate::error::TrackerError;
use crate::generate::Generator;
use crate::models::Month;
use crate::report;
use crate::tracker::{self, Scope};

const PREVIEW_ROWS: usize = 5;

pub(crate) fn as_cli(args: &[String], store: &ExpenseStore) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "generate" | "g" => cli_generate(&args[2..], store),
        "view" | "v" => cli_view(&args[2..], store),
        "insights" | "i" => cli_insights(&args[2..], store),
        "export" => cli_export(&args[2..], store),
        "status" => cli_status(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expensetrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

/// Text shown to the user for a failed command.
pub(crate) fn user_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TrackerError>() {
        Some(e) => e.user_message(),
        None => format!("{err:#}"),
    }
}

fn print_usage() {
    println!("expensetrack — synthetic monthly expense tracker");
    println!();
    println!("Usage: expensetrack [--db <path>] <command>");
    println!();
    println!("Commands:");
    println!("  generate <Month>              Generate 51 records for a month and load them");
    println!("  view <Month|all>              Show stored records");
    println!("  insights <Month|all>          Spending totals per category");
    println!("  export <Month|all> [path]     Write stored records to CSV");
    println!("  status                        Row count per month");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("The database path can also be set with EXPENSETRACK_DB.");
}

fn scope_arg(args: &[String]) -> Scope {
    args.first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| Scope::parse(a))
        .unwrap_or(Scope::All)
}

fn cli_generate(args: &[String], store: &ExpenseStore) -> Result<()> {
    let Some(month_name) = args.first() else {
        anyhow::bail!("Usage: expensetrack generate <Month>");
    };

    let mut generator = Generator::standard();
    let batch = tracker::generate_and_load(store, &mut generator, month_name)?;
    let month = batch
        .first()
        .map(|r| r.month.to_string())
        .unwrap_or_else(|| month_name.clone());

    println!(
        "Data for {month} generated and loaded into the database ({} records)",
        batch.len()
    );
    println!();
    print!("{}", format::records_table(&batch[..batch.len().min(PREVIEW_ROWS)]));
    Ok(())
}

fn cli_view(args: &[String], store: &ExpenseStore) -> Result<()> {
    let scope = scope_arg(args);
    let records = tracker::fetch(store, &scope)?;
    if records.is_empty() {
        println!("No expense records for {}", scope.label());
        return Ok(());
    }
    print!("{}", format::records_table(&records));
    println!();
    println!("{} records", records.len());
    Ok(())
}

fn cli_insights(args: &[String], store: &ExpenseStore) -> Result<()> {
    let scope = scope_arg(args);
    let records = tracker::fetch(store, &scope)?;
    if records.is_empty() {
        println!("No expense records for {}", scope.label());
        return Ok(());
    }

    let totals = report::aggregate_by_category(&records);
    let shares = report::category_shares(&totals);

    println!("Spending insights — {}", scope.label());
    println!("{}", "─".repeat(41));
    print!("{}", format::summary_lines(&report::summarize(&records)));
    println!();
    print!("{}", format::shares_table(&shares));
    Ok(())
}

fn cli_export(args: &[String], store: &ExpenseStore) -> Result<()> {
    let scope = scope_arg(args);
    let records = tracker::fetch(store, &scope)?;

    let output_path = args
        .get(1)
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(crate::config::shellexpand(a)))
        .unwrap_or_else(|| default_export_path(&scope));

    let count = crate::export::export_to_path(&records, &output_path)?;
    if count == 0 {
        println!("No expense records for {}", scope.label());
    } else {
        println!("Exported {count} records to {}", output_path.display());
    }
    Ok(())
}

fn default_export_path(scope: &Scope) -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    let suffix = match scope {
        Scope::All => "all".to_string(),
        Scope::Month(name) => Month::parse(name)
            .map(|m| m.table_name().to_string())
            .unwrap_or_else(|| name.trim().to_lowercase()),
    };
    PathBuf::from(format!("{home}/expenses-{suffix}.csv"))
}

fn cli_status(store: &ExpenseStore) -> Result<()> {
    let partitions = store.partitions()?;
    let counts = store.row_counts()?;
    println!("Database:   {}", store.path().display());
    println!("Partitions: {}", partitions.len());
    println!("{}", "─".repeat(24));
    for (month, count) in &counts {
        println!("  {:<12} {count:>6}", month.name());
    }
    let total: i64 = counts.iter().map(|(_, c)| c).sum();
    println!("  {:<12} {total:>6}", "Total");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn ready_store() -> (tempfile::TempDir, ExpenseStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ExpenseStore::new(dir.path().join("expenses.db"));
        store.ensure_schema().unwrap();
        (dir, store)
    }

    #[test]
    fn test_scope_arg_defaults_to_all() {
        assert_eq!(scope_arg(&[]), Scope::All);
        assert_eq!(scope_arg(&args(&["--x"])), Scope::All);
        assert_eq!(scope_arg(&args(&["May"])), Scope::Month("May".into()));
    }

    #[test]
    fn test_generate_then_view() {
        let (_dir, store) = ready_store();
        as_cli(&args(&["expensetrack", "generate", "March"]), &store).unwrap();
        as_cli(&args(&["expensetrack", "view", "march"]), &store).unwrap();
        as_cli(&args(&["expensetrack", "insights", "all"]), &store).unwrap();
        assert_eq!(store.query("march").unwrap().len(), 51);
    }

    #[test]
    fn test_generate_invalid_month_message() {
        let (_dir, store) = ready_store();
        let err = as_cli(&args(&["expensetrack", "generate", "Frobruary"]), &store).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::InvalidMonth(_))
        ));
        assert!(user_message(&err).contains("spelled correctly"));
    }

    #[test]
    fn test_view_unknown_partition_message() {
        let (_dir, store) = ready_store();
        let err = as_cli(&args(&["expensetrack", "view", "Smarch"]), &store).unwrap_err();
        assert!(user_message(&err).contains("smarch"));
    }

    #[test]
    fn test_export_command() {
        let (dir, store) = ready_store();
        as_cli(&args(&["expensetrack", "generate", "April"]), &store).unwrap();
        let out = dir.path().join("april.csv");
        let out_str = out.to_string_lossy().to_string();
        as_cli(&args(&["expensetrack", "export", "april", &out_str]), &store).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 52);
    }

    #[test]
    fn test_unknown_command() {
        let (_dir, store) = ready_store();
        assert!(as_cli(&args(&["expensetrack", "frobnicate"]), &store).is_err());
    }

    #[test]
    fn test_default_export_path() {
        let path = default_export_path(&Scope::Month("March".into()));
        assert!(path.to_string_lossy().ends_with("expenses-march.csv"));
        let path = default_export_path(&Scope::All);
        assert!(path.to_string_lossy().ends_with("expenses-all.csv"));
    }
}
