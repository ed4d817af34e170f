mod config;
mod db;
mod error;
mod export;
mod generate;
mod models;
mod report;
mod run;
mod tracker;

use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let (db_flag, args) = config::split_db_flag(&args)?;
    let config = config::Config::from_env(db_flag.as_deref())?;

    let store = db::ExpenseStore::new(&config.db_path);
    store.ensure_schema().with_context(|| {
        format!("Failed to prepare database: {}", config.db_path.display())
    })?;

    match run::as_cli(&args, &store) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", run::user_message(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}
