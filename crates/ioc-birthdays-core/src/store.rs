//! Process-wide roster state.
//!
//! The roster is held as an immutable snapshot. Readers take an
//! `Arc<Roster>` and keep it for as long as they render; `refresh` swaps in
//! a freshly loaded snapshot and leaves the old one alone if loading fails.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::RosterError;
use crate::normalize::BirthDateFormat;
use crate::roster::Roster;

/// Global store, set up once at startup
static STORE: OnceLock<RosterStore> = OnceLock::new();

/// Where the roster comes from and how its dates are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSource {
    pub path: PathBuf,
    pub format: BirthDateFormat,
}

#[derive(Debug)]
pub struct RosterStore {
    source: RosterSource,
    current: RwLock<Arc<Roster>>,
}

impl RosterStore {
    /// A store holding an empty roster until the first `refresh`.
    pub fn new(source: RosterSource) -> Self {
        Self::with_roster(source, Roster::empty())
    }

    pub fn with_roster(source: RosterSource, roster: Roster) -> Self {
        Self {
            source,
            current: RwLock::new(Arc::new(roster)),
        }
    }

    pub fn source(&self) -> &RosterSource {
        &self.source
    }

    /// The current roster snapshot.
    pub fn snapshot(&self) -> Arc<Roster> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Reload from the source file. On failure the previous snapshot stays.
    pub fn refresh(&self) -> Result<Arc<Roster>, RosterError> {
        let roster = match Roster::load(&self.source.path, &self.source.format) {
            Ok(roster) => Arc::new(roster),
            Err(e) => {
                warn!(error = %e, "Roster refresh failed, keeping previous snapshot");
                return Err(e);
            }
        };

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&roster);
        Ok(roster)
    }
}

/// Initialize the global store. Call this once at startup; later calls
/// return the store created by the first one.
pub fn init(source: RosterSource) -> &'static RosterStore {
    STORE.get_or_init(|| {
        debug!(path = %source.path.display(), "Roster store initialized");
        RosterStore::new(source)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ioc-birthdays-{}-{}.csv",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    fn source(path: PathBuf) -> RosterSource {
        RosterSource {
            path,
            format: BirthDateFormat::default(),
        }
    }

    #[test]
    fn test_new_store_is_empty_until_refresh() {
        let path = temp_csv("empty-until-refresh", "name,born\nA,20-Jul-60\nB,01-Jan-50\n");
        let store = RosterStore::new(source(path.clone()));
        assert!(store.snapshot().is_empty());

        let roster = store.refresh().unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(store.snapshot().len(), 2);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_refresh_picks_up_changes() {
        let path = temp_csv("picks-up-changes", "name,born\nA,20-Jul-60\n");
        let store = RosterStore::new(source(path.clone()));
        store.refresh().unwrap();
        let before = store.snapshot();

        fs::write(&path, "name,born\nA,20-Jul-60\nB,21-Jul-60\n").unwrap();
        store.refresh().unwrap();

        // Readers holding the old snapshot are unaffected
        assert_eq!(before.len(), 1);
        assert_eq!(store.snapshot().len(), 2);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_failed_refresh_keeps_previous_snapshot() {
        let path = temp_csv("keeps-previous", "name,born\nA,20-Jul-60\n");
        let store = RosterStore::new(source(path.clone()));
        store.refresh().unwrap();

        fs::remove_file(&path).unwrap();
        assert!(store.refresh().is_err());
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_with_roster() {
        let store = RosterStore::with_roster(
            source(PathBuf::from("unused.csv")),
            Roster::from_reader("name\nA\n".as_bytes(), &BirthDateFormat::default()).unwrap(),
        );
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.source().path, PathBuf::from("unused.csv"));
    }

    #[test]
    fn test_global_init_is_once() {
        let first = init(source(PathBuf::from("first.csv")));
        let second = init(source(PathBuf::from("second.csv")));
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.source().path, PathBuf::from("first.csv"));
        assert!(std::ptr::eq(STORE.get().unwrap(), first));
    }
}
