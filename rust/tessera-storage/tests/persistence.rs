use tessera_storage::{CompositeKey, FileSystemStore, KeyValueStore};
use testresult::TestResult;

#[test]
fn values_survive_reopening_the_same_root() -> TestResult {
    let root = tempfile::tempdir()?;
    let key = CompositeKey::new("tessera.audit").with("alice").encode();

    {
        let store = FileSystemStore::open(root.path())?;
        store.put(&key, b"k=v")?;
    }

    let reopened = FileSystemStore::open(root.path())?;
    assert!(reopened.exists(&key));
    assert_eq!(reopened.get(&key)?, Some(b"k=v".to_vec()));
    Ok(())
}

#[test]
fn separate_roots_do_not_share_values() -> TestResult {
    let first = tempfile::tempdir()?;
    let second = tempfile::tempdir()?;

    FileSystemStore::open(first.path())?.put("key", b"one")?;

    assert_eq!(FileSystemStore::open(second.path())?.get("key")?, None);
    Ok(())
}
