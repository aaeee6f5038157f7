//! In-process key-value store.

use super::{KeyValueStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Key-value store kept entirely in memory.
///
/// Contents are lost when the value is dropped. Used as the substitute
/// store in tests and for throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKvStore;
    use crate::store::KeyValueStore;

    #[test]
    fn get_on_unknown_key_is_none() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("items").unwrap(), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = MemoryKvStore::with_entries([("items", "[]")]);
        store.set("items", "[1]").unwrap();
        assert_eq!(store.get("items").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn borrowed_store_shares_contents() {
        let store = MemoryKvStore::new();
        let borrowed = &store;
        borrowed.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
