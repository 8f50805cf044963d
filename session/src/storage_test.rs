use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);

    store.remove("k");
    assert_eq!(store.get("k"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_remove_absent_key_is_noop() {
    let store = MemoryStore::with_entry("a", "1");
    store.remove("missing");
    assert_eq!(store.get("a").as_deref(), Some("1"));
}
