use super::*;

fn alice() -> Session {
    Session::authenticated("alice".to_owned(), "a1".to_owned(), "r1".to_owned()).unwrap()
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let clone = storage.clone();
    clone.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    storage.remove("k").unwrap();
    assert!(clone.get("k").unwrap().is_none());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_natively() {
    assert_eq!(BrowserStorage.get(USERNAME_KEY), Err(StorageError::Unavailable));
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn save_writes_three_keys() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&alice()).unwrap();
    let entries = store.backend().entries();
    assert_eq!(entries.get("username").map(String::as_str), Some("alice"));
    assert_eq!(entries.get("accessToken").map(String::as_str), Some("a1"));
    assert_eq!(entries.get("refreshToken").map(String::as_str), Some("r1"));
}

#[test]
fn save_skips_anonymous_session() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&Session::anonymous()).unwrap();
    assert!(store.backend().entries().is_empty());
}

#[test]
fn load_round_trips_saved_session() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&alice()).unwrap();
    assert_eq!(store.load().unwrap().into_session(), alice());
}

#[test]
fn clear_removes_only_credential_keys() {
    let storage = MemoryStorage::new();
    storage.set("theme", "dark").unwrap();
    let store = SessionStore::new(storage);
    store.save(&alice()).unwrap();
    store.clear().unwrap();
    let entries = store.backend().entries();
    assert!(CREDENTIAL_KEYS.iter().all(|key| !entries.contains_key(*key)));
    assert_eq!(entries.get("theme").map(String::as_str), Some("dark"));
}

// =============================================================
// PersistedCredentials
// =============================================================

#[test]
fn into_session_requires_every_field() {
    let partial = PersistedCredentials {
        username: Some("alice".to_owned()),
        access_token: Some("a1".to_owned()),
        refresh_token: None,
    };
    assert_eq!(partial.into_session(), Session::anonymous());
}

#[test]
fn into_session_treats_empty_values_as_missing() {
    let blank = PersistedCredentials {
        username: Some(String::new()),
        access_token: Some("a1".to_owned()),
        refresh_token: Some("r1".to_owned()),
    };
    assert!(!blank.into_session().is_authenticated());
}
