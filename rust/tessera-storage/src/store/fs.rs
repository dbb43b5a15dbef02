use std::{
    io::Write,
    path::{Path, PathBuf},
};

use base58::ToBase58;
use tempfile::NamedTempFile;

use crate::{KeyValueStore, StorageError};

// Most filesystems cap a single path component at 255 bytes.
const MAX_FILE_NAME: usize = 255;

/// A basic file-system-based [KeyValueStore] implementation. All values are
/// stored inside a root directory as files named after their (base58-encoded)
/// keys.
#[derive(Clone, Debug)]
pub struct FileSystemStore {
    root_dir: PathBuf,
}

impl FileSystemStore {
    /// Opens a [`FileSystemStore`] that stores files in `root_dir`, creating
    /// the directory if needed.
    pub fn open<Pathlike>(root_dir: Pathlike) -> Result<Self, StorageError>
    where
        Pathlike: AsRef<Path>,
    {
        let root_dir = root_dir.as_ref().to_owned();
        std::fs::create_dir_all(&root_dir)
            .map_err(|error| StorageError::Backend(format!("{error}")))?;
        tracing::debug!(root = %root_dir.display(), "opened file system store");
        Ok(Self { root_dir })
    }

    /// The directory values are stored in.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn make_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("empty key".into()));
        }
        let name = key.as_bytes().to_base58();
        if name.len() > MAX_FILE_NAME {
            return Err(StorageError::InvalidKey(format!(
                "key of {} bytes is too long for a file name",
                key.len()
            )));
        }
        Ok(self.root_dir.join(name))
    }
}

impl KeyValueStore for FileSystemStore {
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.make_path(key)?;
        // Each write stages into its own file, then renames over the target.
        let mut staging = NamedTempFile::new_in(&self.root_dir)
            .map_err(|error| StorageError::Backend(format!("{error}")))?;
        staging
            .write_all(value)
            .map_err(|error| StorageError::Backend(format!("{error}")))?;
        staging
            .persist(&path)
            .map_err(|error| StorageError::Backend(format!("{error}")))?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.make_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        std::fs::read(path)
            .map(Some)
            .map_err(|error| StorageError::Backend(format!("{error}")))
    }

    fn exists(&self, key: &str) -> bool {
        self.make_path(key).is_ok_and(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    #[test]
    fn it_rejects_keys_that_cannot_be_file_names() -> TestResult {
        let root = tempfile::tempdir()?;
        let store = FileSystemStore::open(root.path())?;

        assert!(matches!(store.put("", b"x"), Err(StorageError::InvalidKey(_))));
        let long = "k".repeat(512);
        assert!(matches!(store.put(&long, b"x"), Err(StorageError::InvalidKey(_))));
        assert!(!store.exists(&long));
        Ok(())
    }

    #[test]
    fn it_keeps_every_concurrent_write_of_one_key_whole() -> TestResult {
        let root = tempfile::tempdir()?;
        let store = FileSystemStore::open(root.path())?;
        let values: Vec<Vec<u8>> = (0..8u8).map(|writer| vec![writer; 4096]).collect();

        let failures = std::thread::scope(|scope| {
            let handles: Vec<_> = values
                .iter()
                .map(|value| {
                    let store = &store;
                    scope.spawn(move || {
                        (0..100)
                            .filter(|_| store.put("audit", value).is_err())
                            .count()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or(1))
                .sum::<usize>()
        });
        assert_eq!(failures, 0);

        let stored = store.get("audit")?.ok_or("value missing")?;
        assert!(values.contains(&stored));
        assert_eq!(std::fs::read_dir(root.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn it_creates_the_root_directory() -> TestResult {
        let root = tempfile::tempdir()?;
        let nested = root.path().join("a").join("b");
        let store = FileSystemStore::open(&nested)?;

        assert!(nested.is_dir());
        assert_eq!(store.root_dir(), nested.as_path());
        Ok(())
    }
}
