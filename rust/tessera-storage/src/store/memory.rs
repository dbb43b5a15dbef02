use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::{KeyValueStore, StorageError};

/// A trivial implementation of [KeyValueStore] - backed by a [HashMap] - where
/// all values are kept in memory and never persisted.
///
/// Clones share the same entries.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn exists(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}
