use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc").unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::new();
    store.set(USER_KEY, "{}").unwrap();
    store.set(USER_KEY, r#"{"id":1}"#).unwrap();
    assert_eq!(store.get(USER_KEY).as_deref(), Some(r#"{"id":1}"#));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_missing_key_is_ok() {
    let store = MemoryStore::new();
    assert!(store.remove(TOKEN_KEY).is_ok());
    store.set(TOKEN_KEY, "abc").unwrap();
    store.remove(TOKEN_KEY).unwrap();
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn store_error_messages_name_the_key() {
    let err = StoreError::Write { key: "token".to_owned(), message: "quota exceeded".to_owned() };
    assert_eq!(err.to_string(), "session storage write failed for `token`: quota exceeded");
}
