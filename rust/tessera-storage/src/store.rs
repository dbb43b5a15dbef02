use std::sync::Arc;

use crate::StorageError;

mod memory;
pub use memory::*;

mod fs;
pub use fs::*;

mod measure;
pub use measure::*;

/// A [KeyValueStore] is a facade over some durable storage substrate that is
/// capable of storing and retrieving byte values by string key.
///
/// Every operation addresses a single key; there are no cross-key
/// transactions.
pub trait KeyValueStore: Send + Sync {
    /// Store `value` against `key`, replacing any previous value
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
    /// Retrieve the value (if any) stored against `key`
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    /// Whether a value is stored against `key`
    fn exists(&self, key: &str) -> bool;
}

impl<T> KeyValueStore for Arc<T>
where
    T: KeyValueStore + ?Sized,
{
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.as_ref().put(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.as_ref().get(key)
    }

    fn exists(&self, key: &str) -> bool {
        self.as_ref().exists(key)
    }
}
