use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const DB_ENV_VAR: &str = "EXPENSETRACK_DB";
pub(crate) const DEFAULT_LOG_FILTER: &str = "expensetrack=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
}

impl Config {
    /// Database path precedence: `--db` flag, then `EXPENSETRACK_DB`, then the platform data dir.
    pub(crate) fn resolve(db_flag: Option<&str>, env_value: Option<String>) -> Result<Self> {
        let db_path = match (db_flag, env_value.filter(|v| !v.trim().is_empty())) {
            (Some(flag), _) => PathBuf::from(shellexpand(flag)),
            (None, Some(env)) => PathBuf::from(shellexpand(&env)),
            (None, None) => default_db_path()?,
        };
        Ok(Self { db_path })
    }

    pub(crate) fn from_env(db_flag: Option<&str>) -> Result<Self> {
        Self::resolve(db_flag, std::env::var(DB_ENV_VAR).ok())
    }
}

/// Pull `--db <path>` out of the argument list, returning it and the remaining args.
pub(crate) fn split_db_flag(args: &[String]) -> Result<(Option<String>, Vec<String>)> {
    let mut db = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--db" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--db requires a path"))?;
            db = Some(value.clone());
        } else if let Some(value) = arg.strip_prefix("--db=") {
            db = Some(value.to_string());
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((db, rest))
}

/// Expand a leading `~/` to `$HOME`.
pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "expensetrack", "ExpenseTrack")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("expenses.db"))
}
