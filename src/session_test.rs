use super::*;

// =============================================================================
// MemoryStore via Session
// =============================================================================

#[test]
fn token_none_before_any_login() {
    let session = Session::new(Box::new(MemoryStore::default()));
    assert_eq!(session.token().unwrap(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn store_token_then_token_returns_it() {
    let session = Session::new(Box::new(MemoryStore::default()));
    session.store_token("abc123").unwrap();
    assert_eq!(session.token().unwrap().as_deref(), Some("abc123"));
    assert!(session.is_authenticated());
}

#[test]
fn store_token_overwrites_previous() {
    let session = Session::new(Box::new(MemoryStore::default()));
    session.store_token("first").unwrap();
    session.store_token("second").unwrap();
    assert_eq!(session.token().unwrap().as_deref(), Some("second"));
}

#[test]
fn clear_removes_token() {
    let session = Session::new(Box::new(MemoryStore::default()));
    session.store_token("abc123").unwrap();
    session.clear().unwrap();
    assert_eq!(session.token().unwrap(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn clear_on_empty_slot_succeeds() {
    let session = Session::new(Box::new(MemoryStore::default()));
    session.clear().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let session = Session::new(Box::new(MemoryStore::default()));
    session.store_token("").unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn memory_store_clones_share_the_slot() {
    let store = MemoryStore::default();
    let clone = store.clone();
    store.save("shared").unwrap();
    assert_eq!(clone.load().unwrap().as_deref(), Some("shared"));
}

// =============================================================================
// FileStore
// =============================================================================

fn file_store() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("session"));
    (dir, store)
}

#[test]
fn file_store_load_missing_file_is_none() {
    let (_dir, store) = file_store();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn file_store_round_trip() {
    let (_dir, store) = file_store();
    store.save("tok-xyz").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("tok-xyz"));
}

#[test]
fn file_store_clear_deletes_file() {
    let (_dir, store) = file_store();
    store.save("tok-xyz").unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn file_store_clear_missing_file_succeeds() {
    let (_dir, store) = file_store();
    store.clear().unwrap();
}

#[test]
fn file_store_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("deeper").join("session"));
    store.save("tok").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("tok"));
}

#[test]
fn session_over_file_store_behaves_like_memory() {
    let (_dir, store) = file_store();
    let session = Session::new(Box::new(store));
    assert!(!session.is_authenticated());
    session.store_token("tok").unwrap();
    assert!(session.is_authenticated());
    session.clear().unwrap();
    assert!(!session.is_authenticated());
}
