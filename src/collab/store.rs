//! Match persistence with optimistic versioning.
//!
//! Saved snapshots carry a version that goes up by one on every save. A
//! save names the version it was derived from and is rejected once the
//! stored version has moved on. Mid-cycle progress lives in a separate
//! cache slot until the cycle is committed or undone.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{CollaboratorError, MatchId};

/// A value with the stored version it was read at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioned<T> {
    pub version: u64,
    pub value: T,
}

impl<T> Versioned<T> {
    #[must_use]
    pub fn new(version: u64, value: T) -> Self {
        Self { version, value }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Versioned<U> {
        Versioned {
            version: self.version,
            value: f(self.value),
        }
    }
}

/// Snapshot storage for matches.
pub trait MatchStore {
    /// Last saved snapshot.
    fn load(&self, id: MatchId) -> Result<Versioned<Vec<u8>>, CollaboratorError>;

    /// Commit a snapshot derived from `expected_version` and return the new
    /// version. A match that was never saved has version 0.
    fn save(
        &mut self,
        id: MatchId,
        expected_version: u64,
        bytes: Vec<u8>,
    ) -> Result<u64, CollaboratorError>;

    /// Keep uncommitted progress. `snapshot.version` is the saved version
    /// it builds on.
    fn cache(&mut self, id: MatchId, snapshot: Versioned<Vec<u8>>);

    fn cached(&self, id: MatchId) -> Option<Versioned<Vec<u8>>>;

    fn discard_cache(&mut self, id: MatchId);
}

/// In-memory [`MatchStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saved: FxHashMap<MatchId, Versioned<Vec<u8>>>,
    cached: FxHashMap<MatchId, Versioned<Vec<u8>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored version, 0 if never saved.
    #[must_use]
    pub fn version(&self, id: MatchId) -> u64 {
        self.saved.get(&id).map_or(0, |v| v.version)
    }
}

impl MatchStore for MemoryStore {
    fn load(&self, id: MatchId) -> Result<Versioned<Vec<u8>>, CollaboratorError> {
        self.saved
            .get(&id)
            .cloned()
            .ok_or(CollaboratorError::NotFound(id))
    }

    fn save(
        &mut self,
        id: MatchId,
        expected_version: u64,
        bytes: Vec<u8>,
    ) -> Result<u64, CollaboratorError> {
        let actual = self.version(id);
        if actual != expected_version {
            return Err(CollaboratorError::Conflict {
                id,
                expected: expected_version,
                actual,
            });
        }
        let version = actual + 1;
        self.saved.insert(id, Versioned::new(version, bytes));
        Ok(version)
    }

    fn cache(&mut self, id: MatchId, snapshot: Versioned<Vec<u8>>) {
        self.cached.insert(id, snapshot);
    }

    fn cached(&self, id: MatchId) -> Option<Versioned<Vec<u8>>> {
        self.cached.get(&id).cloned()
    }

    fn discard_cache(&mut self, id: MatchId) {
        self.cached.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_bumps_version() {
        let mut store = MemoryStore::new();
        let id = MatchId(1);

        assert_eq!(store.save(id, 0, vec![1]).unwrap(), 1);
        assert_eq!(store.save(id, 1, vec![2]).unwrap(), 2);
        assert_eq!(store.load(id).unwrap(), Versioned::new(2, vec![2]));
    }

    #[test]
    fn test_stale_save_conflicts() {
        let mut store = MemoryStore::new();
        let id = MatchId(1);
        store.save(id, 0, vec![1]).unwrap();
        store.save(id, 1, vec![2]).unwrap();

        let err = store.save(id, 1, vec![3]).unwrap_err();

        assert!(matches!(
            err,
            CollaboratorError::Conflict {
                expected: 1,
                actual: 2,
                ..
            }
        ));
        assert_eq!(store.load(id).unwrap().value, vec![2]);
    }

    #[test]
    fn test_missing_match() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load(MatchId(9)),
            Err(CollaboratorError::NotFound(MatchId(9)))
        ));
    }

    #[test]
    fn test_cache_slot_is_separate() {
        let mut store = MemoryStore::new();
        let id = MatchId(4);
        store.save(id, 0, vec![1]).unwrap();
        store.cache(id, Versioned::new(1, vec![5]));

        assert_eq!(store.cached(id), Some(Versioned::new(1, vec![5])));
        assert_eq!(store.load(id).unwrap().value, vec![1]);

        store.discard_cache(id);
        assert_eq!(store.cached(id), None);
    }
}
