#![warn(missing_docs)]

//! Durable key-value persistence used for node-local metadata.
//!
//! Pick a [KeyValueStore] implementation ([MemoryStore] for tests and
//! ephemeral nodes, [FileSystemStore] for anything that should survive a
//! restart) and address entries with a [CompositeKey]:
//!
//! ```rust
//! use tessera_storage::{CompositeKey, KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::default();
//! let key = CompositeKey::new("audit").with("alice").encode();
//!
//! store.put(&key, b"k=v").unwrap();
//! assert!(store.exists(&key));
//! assert_eq!(store.get(&key).unwrap(), Some(b"k=v".to_vec()));
//! ```

mod error;
pub use error::*;

mod key;
pub use key::*;

mod store;
pub use store::*;
