use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{KeyValueStore, StorageError};

/// A [MeasuredStore] acts as a proxy over a [KeyValueStore] implementation
/// that measures reads and writes.
///
/// `get` counts as a read; `exists` is not counted.
#[derive(Clone, Debug)]
pub struct MeasuredStore<Store> {
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
    store: Store,
}

impl<Store> MeasuredStore<Store>
where
    Store: KeyValueStore,
{
    /// Wrap the provided [KeyValueStore] so that reads and writes to it may be
    /// measured.
    pub fn new(store: Store) -> Self {
        Self {
            reads: Arc::new(AtomicUsize::default()),
            writes: Arc::new(AtomicUsize::default()),
            store,
        }
    }

    /// The aggregate number of reads from the wrapped [KeyValueStore]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// The aggregate number of writes to the wrapped [KeyValueStore]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl<Store> KeyValueStore for MeasuredStore<Store>
where
    Store: KeyValueStore,
{
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.store.put(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.store.get(key)
    }

    fn exists(&self, key: &str) -> bool {
        self.store.exists(key)
    }
}
