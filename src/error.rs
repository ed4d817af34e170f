use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum TrackerError {
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
    #[error("Unknown partition: {0}")]
    UnknownPartition(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),
    #[error("Catalog has no {0} to choose from")]
    EmptyCatalog(&'static str),
}

impl TrackerError {
    /// Message shown to the user when a command fails.
    pub(crate) fn user_message(&self) -> String {
        match self {
            Self::InvalidMonth(name) => format!(
                "Invalid month entered: '{name}'. Please ensure the month is spelled correctly."
            ),
            Self::UnknownPartition(name) => format!("No expense data table for '{name}'."),
            Self::StorageUnavailable(e) => format!("The expense database could not be accessed: {e}"),
            Self::EmptyCatalog(list) => format!("Cannot generate data: no {list} configured."),
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, TrackerError>;
