use super::*;

#[test]
fn get_misses_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.get("amsa_auth"), None);
}

#[test]
fn set_creates_state_dir_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join(".amsa"));
    store.set("amsa_auth", r#"{"token":"t"}"#).unwrap();

    assert!(store.dir().join("amsa_auth.json").is_file());
    assert_eq!(store.get("amsa_auth").as_deref(), Some(r#"{"token":"t"}"#));
}

#[test]
fn set_replaces_and_remove_deletes() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("two"));

    store.remove("k");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}

#[test]
fn set_reports_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "").unwrap();
    let store = FileStore::new(blocker.join("state"));
    assert!(matches!(store.set("k", "v"), Err(StorageError::Write(_))));
}
