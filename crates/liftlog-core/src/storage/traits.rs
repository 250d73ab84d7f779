//! Key-value store trait definition.
//!
//! The `KeyValueStore` trait is the only interface the repositories use to
//! reach persistent state. Backends store strings; the provided `load`/`save`
//! helpers handle JSON encoding.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Synchronous, single-writer key-value store.
///
/// Implementations must ensure:
/// - `set` replaces the whole value for a key
/// - `get` returns `Ok(None)` for a key that was never written
///
/// There are no transactions; a read-modify-write sequence is only safe
/// with a single logical writer.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the raw value stored under `key`.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Load and decode the JSON value under `key`.
    ///
    /// Returns `fallback` when the key is absent or its value does not
    /// decode as `T`. Backend failures are still reported as errors so that
    /// a transient read failure is never mistaken for an empty collection.
    fn load<T>(&self, key: &str, fallback: T) -> Result<T>
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let Some(raw) = self.get(key)? else {
            return Ok(fallback);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "stored value failed to decode, using fallback");
                Ok(fallback)
            }
        }
    }

    /// Load a JSON array under `key`, decoding each element on its own.
    ///
    /// Elements that do not decode as `T` are skipped with a warning so one
    /// bad record never hides the rest of the collection. A value that is
    /// not an array at all reads as empty.
    fn load_records<T>(&self, key: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let raw: Vec<serde_json::Value> = self.load(key, Vec::new())?;
        let total = raw.len();
        let records: Vec<T> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(key, error = %err, "skipping unreadable record");
                    None
                }
            })
            .collect();
        if records.len() < total {
            tracing::warn!(key, skipped = total - records.len(), "collection has unreadable records");
        }
        Ok(records)
    }

    /// Encode `value` as JSON and store it under `key`.
    fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        tracing::debug!(key, bytes = raw.len(), "saving collection");
        self.set(key, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    #[test]
    fn test_load_missing_key_returns_fallback() {
        let store = InMemoryStore::new();
        let value: Vec<u32> = store.load("absent", vec![7]).unwrap();
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_load_unparseable_value_returns_fallback() {
        let store = InMemoryStore::new();
        store.set("broken", "{not json".to_string()).unwrap();

        let value: Vec<u32> = store.load("broken", Vec::new()).unwrap();
        assert!(value.is_empty());
    }

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_load_records_skips_bad_elements() {
        let store = InMemoryStore::new();
        store
            .set("named", r#"[{"name":"a"},{"name":3},{"other":true},{"name":"b"}]"#.to_string())
            .unwrap();

        let records: Vec<Named> = store.load_records("named").unwrap();
        let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_load_records_non_array_is_empty() {
        let store = InMemoryStore::new();
        store.set("named", r#"{"name":"a"}"#.to_string()).unwrap();

        let records: Vec<Named> = store.load_records("named").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = InMemoryStore::new();
        store.save("numbers", &[1, 2, 3]).unwrap();

        let value: Vec<u32> = store.load("numbers", Vec::new()).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }
}
