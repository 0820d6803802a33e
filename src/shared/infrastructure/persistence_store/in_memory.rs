// In memory implementation of the PersistenceStore port.
//
// Purpose
// - Support tracker tests and local development without touching the disk.
//
// Responsibilities
// - Keep values per key in a map.
// - Count successful writes so tests can assert that no redundant write happened.
// - Simulate an unavailable store (offline) or a store that refuses writes (read only).

use crate::shared::infrastructure::persistence_store::{PersistenceError, PersistenceStore};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct InMemoryPersistenceStore {
    values: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    offline: bool,
    read_only: bool,
}

impl InMemoryPersistenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn toggle_read_only(&mut self) {
        self.read_only = !self.read_only;
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }
}

impl PersistenceStore for InMemoryPersistenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.offline {
            return Err(PersistenceError::Unavailable("Persistence store offline".into()));
        }
        let values = self
            .values
            .lock()
            .map_err(|_| PersistenceError::Unavailable("store lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.offline {
            return Err(PersistenceError::Unavailable("Persistence store offline".into()));
        }
        if self.read_only {
            return Err(PersistenceError::Rejected("quota exceeded".into()));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_| PersistenceError::Unavailable("store lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_persistence_store_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_return_none_for_a_missing_key() {
        let store = InMemoryPersistenceStore::new();
        assert_eq!(store.get("missing"), Ok(None));
    }

    #[rstest]
    fn it_should_set_and_get_a_value() {
        let store = InMemoryPersistenceStore::new();
        store.set("key", "value").expect("expected to set the value");
        assert_eq!(store.get("key"), Ok(Some("value".to_string())));
        assert_eq!(store.writes(), 1);
    }

    #[rstest]
    fn it_should_overwrite_on_the_last_write() {
        let store = InMemoryPersistenceStore::with_value("key", "first");
        store.set("key", "second").unwrap();
        assert_eq!(store.raw("key"), Some("second".to_string()));
    }

    #[rstest]
    fn it_should_fail_if_the_store_is_offline() {
        let mut store = InMemoryPersistenceStore::new();
        store.toggle_offline();
        assert!(matches!(
            store.get("key"),
            Err(PersistenceError::Unavailable(_))
        ));
        assert!(matches!(
            store.set("key", "value"),
            Err(PersistenceError::Unavailable(_))
        ));
        assert_eq!(store.writes(), 0);
    }

    #[rstest]
    fn it_should_reject_writes_but_allow_reads_when_read_only() {
        let mut store = InMemoryPersistenceStore::with_value("key", "value");
        store.toggle_read_only();
        assert_eq!(store.get("key"), Ok(Some("value".to_string())));
        assert_eq!(
            store.set("key", "other"),
            Err(PersistenceError::Rejected("quota exceeded".into()))
        );
        assert_eq!(store.raw("key"), Some("value".to_string()));
    }
}
