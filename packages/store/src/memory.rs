use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::storage::KeyValueStore;

/// In-memory KeyValueStore for tests and non-browser builds.
///
/// Clones share the same map, so a second store built over a clone behaves
/// like a reload of the same browser tab.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.lock().insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("token").is_none());

        storage.set("token", "abc");
        assert_eq!(storage.get("token").as_deref(), Some("abc"));

        storage.set("token", "def");
        assert_eq!(storage.get("token").as_deref(), Some("def"));
        assert_eq!(storage.len(), 1);

        storage.remove("token");
        assert!(storage.get("token").is_none());
        assert!(storage.is_empty());

        // Removing a missing key is a no-op
        storage.remove("token");
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("user", "{}");
        assert_eq!(other.get("user").as_deref(), Some("{}"));

        other.remove("user");
        assert!(storage.get("user").is_none());
    }
}
