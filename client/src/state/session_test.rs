use super::*;

#[test]
fn fresh_session_has_no_token() {
    let session = Session::init(MemoryStorage::default());
    assert_eq!(session.token(), None);
    assert!(!session.is_signed_in());
}

#[test]
fn store_token_writes_under_fixed_key() {
    let session = Session::init(MemoryStorage::default());
    assert!(session.store_token("abc"));
    assert_eq!(session.store().get(TOKEN_KEY), Some("abc".to_owned()));
    assert_eq!(session.token(), Some("abc".to_owned()));
    assert_eq!(session.store().writes(), 1);
}

#[test]
fn store_token_replaces_previous_token() {
    let session = Session::init(MemoryStorage::default());
    session.store_token("first");
    session.store_token("second");
    assert_eq!(session.token(), Some("second".to_owned()));
    assert_eq!(session.store().writes(), 2);
}

#[test]
fn clear_removes_token() {
    let session = Session::init(MemoryStorage::default());
    session.store_token("abc");
    assert!(session.clear());
    assert_eq!(session.token(), None);
}

#[test]
fn empty_stored_value_is_not_a_token() {
    let store = MemoryStorage::default();
    store.set(TOKEN_KEY, "").unwrap();
    let session = Session::init(store);
    assert!(!session.is_signed_in());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_outside_browser_is_unavailable() {
    let session = Session::init(BrowserStorage);
    assert_eq!(session.token(), None);
    assert!(!session.store_token("abc"));
    assert!(!session.clear());
}
