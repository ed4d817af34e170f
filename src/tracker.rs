//! Operations the command line calls: each one is a single request/response
//! against the store.

use rand::Rng;

use crate::db::ExpenseStore;
use crate::error::Result;
use crate::generate::{Generator, DEFAULT_BATCH_SIZE};
use crate::models::ExpenseRecord;

/// Which records a read covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scope {
    All,
    Month(String),
}

impl Scope {
    pub(crate) fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Month(s.to_string())
        }
    }

    pub(crate) fn label(&self) -> String {
        match self {
            Self::All => "all months".to_string(),
            Self::Month(name) => name.trim().to_string(),
        }
    }
}

/// Generate a default-sized batch for `month_name`, append it, and hand it back for preview.
pub(crate) fn generate_and_load<R: Rng>(
    store: &ExpenseStore,
    generator: &mut Generator<R>,
    month_name: &str,
) -> Result<Vec<ExpenseRecord>> {
    let records = generator.generate(month_name, DEFAULT_BATCH_SIZE)?;
    store.load(&records, month_name)?;
    Ok(records)
}

pub(crate) fn fetch(store: &ExpenseStore, scope: &Scope) -> Result<Vec<ExpenseRecord>> {
    match scope {
        Scope::All => store.query_all(),
        Scope::Month(name) => store.query(name),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::TrackerError;
    use crate::models::{Catalog, Month};

    fn setup() -> (tempfile::TempDir, ExpenseStore, Generator<StdRng>) {
        let dir = tempfile::tempdir().unwrap();
        let store = ExpenseStore::new(dir.path().join("expenses.db"));
        store.ensure_schema().unwrap();
        let generator = Generator::new(Catalog::STANDARD, StdRng::seed_from_u64(21));
        (dir, store, generator)
    }

    #[test]
    fn test_scope_parse() {
        assert_eq!(Scope::parse("all"), Scope::All);
        assert_eq!(Scope::parse(" ALL "), Scope::All);
        assert_eq!(Scope::parse("March"), Scope::Month("March".into()));
    }

    #[test]
    fn test_generate_and_load_returns_batch() {
        let (_dir, store, mut generator) = setup();
        let batch = generate_and_load(&store, &mut generator, "January").unwrap();
        assert_eq!(batch.len(), DEFAULT_BATCH_SIZE);
        let stored = fetch(&store, &Scope::parse("january")).unwrap();
        assert_eq!(stored.len(), DEFAULT_BATCH_SIZE);
        assert!(stored.iter().all(|r| batch.contains(r)));
    }

    #[test]
    fn test_generate_and_load_invalid_month() {
        let (_dir, store, mut generator) = setup();
        let result = generate_and_load(&store, &mut generator, "Frobruary");
        assert!(matches!(result, Err(TrackerError::InvalidMonth(_))));
        assert!(fetch(&store, &Scope::All).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_all_sums_partitions() {
        let (_dir, store, mut generator) = setup();
        generate_and_load(&store, &mut generator, "May").unwrap();
        generate_and_load(&store, &mut generator, "March").unwrap();
        generate_and_load(&store, &mut generator, "May").unwrap();

        let all = fetch(&store, &Scope::All).unwrap();
        assert_eq!(all.len(), 3 * DEFAULT_BATCH_SIZE);
        assert!(all[..DEFAULT_BATCH_SIZE].iter().all(|r| r.month == Month::March));
        assert!(all[DEFAULT_BATCH_SIZE..].iter().all(|r| r.month == Month::May));
    }

    #[test]
    fn test_fetch_unknown_partition() {
        let (_dir, store, _generator) = setup();
        let result = fetch(&store, &Scope::parse("Smarch"));
        assert!(matches!(result, Err(TrackerError::UnknownPartition(_))));
    }
}
