use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum StorageError {
    /// An error that occurs when working with a storage backend
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// A key that cannot be stored or parsed
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}
