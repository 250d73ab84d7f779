//! In-memory store backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{LiftlogError, Result};
use crate::storage::traits::KeyValueStore;

/// Process-local store backed by a map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the map, returning an error if the mutex is poisoned.
    fn lock_values(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| LiftlogError::Storage("In-memory store poisoned".to_string()))
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.lock_values().map(|values| values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock_values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.lock_values()?.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());

        store.set("k", "1".to_string()).unwrap();
        store.set("k", "2".to_string()).unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }
}
