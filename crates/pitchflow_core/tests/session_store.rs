use pitchflow_core::db::open_db_in_memory;
use pitchflow_core::session::{
    FileSessionStorage, MemorySessionStorage, SessionState, SessionStorage, SessionStore,
    SqliteSessionStorage, SESSION_STORAGE_KEY,
};
use pitchflow_core::{DemoUser, Role};

#[test]
fn sign_in_then_rehydrate_restores_identity_for_every_role() {
    for role in Role::ALL {
        let mut store = SessionStore::rehydrate(MemorySessionStorage::new());
        let user = store.sign_in(role);
        assert_eq!(user, DemoUser::for_role(role));

        let restored = SessionStore::rehydrate(store.into_storage());
        assert_eq!(restored.current(), Some(&DemoUser::for_role(role)));
        assert_eq!(restored.state().role(), Some(role));
    }
}

#[test]
fn persisted_entry_uses_wire_fields() {
    let mut store = SessionStore::rehydrate(MemorySessionStorage::new());
    store.sign_in(Role::Investor);

    let raw = store.storage().read(SESSION_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["id"], "demo-investor-001");
    assert_eq!(value["email"], "investor@venture.cap");
    assert_eq!(value["name"], "Demo Investor");
    assert_eq!(value["role"], "investor");
}

#[test]
fn sign_out_when_anonymous_is_a_no_op() {
    let mut store = SessionStore::rehydrate(MemorySessionStorage::new());
    store.sign_out();
    store.sign_out();

    assert_eq!(store.state(), &SessionState::Anonymous);
    assert_eq!(store.storage().read(SESSION_STORAGE_KEY).unwrap(), None);
}

#[test]
fn sign_out_removes_persisted_entry() {
    let mut store = SessionStore::rehydrate(MemorySessionStorage::new());
    store.sign_in(Role::Team);
    store.sign_out();

    assert!(!store.is_authenticated());
    let restored = SessionStore::rehydrate(store.into_storage());
    assert_eq!(restored.current(), None);
}

#[test]
fn signing_in_again_replaces_the_session() {
    let mut store = SessionStore::rehydrate(MemorySessionStorage::new());
    store.sign_in(Role::Founder);
    store.sign_in(Role::Team);

    let restored = SessionStore::rehydrate(store.into_storage());
    assert_eq!(restored.state().role(), Some(Role::Team));
}

#[test]
fn malformed_entries_rehydrate_as_anonymous() {
    for raw in [
        "not json",
        "{}",
        r#"{"id":"x","email":"x@y","name":"X","role":"admin"}"#,
        "[]",
    ] {
        let storage = MemorySessionStorage::new();
        storage.write(SESSION_STORAGE_KEY, raw).unwrap();
        let store = SessionStore::rehydrate(storage);
        assert_eq!(store.state(), &SessionState::Anonymous, "entry {raw}");
    }
}

#[test]
fn file_storage_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let session_dir = dir.path().join("session");

    let mut store = SessionStore::rehydrate(FileSessionStorage::new(&session_dir));
    store.sign_in(Role::Founder);
    assert!(session_dir.join("pitchflow_demo_user.json").exists());

    let restored = SessionStore::rehydrate(FileSessionStorage::new(&session_dir));
    assert_eq!(restored.current(), Some(&DemoUser::for_role(Role::Founder)));

    let mut restored = restored;
    restored.sign_out();
    assert!(!session_dir.join("pitchflow_demo_user.json").exists());
}

#[test]
fn file_storage_missing_directory_reads_as_anonymous() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::rehydrate(FileSessionStorage::new(dir.path().join("absent")));
    assert!(!store.is_authenticated());
    assert!(store.is_demo_mode());
}

#[test]
fn sqlite_storage_round_trips_through_client_storage() {
    let conn = open_db_in_memory().unwrap();

    let mut store = SessionStore::rehydrate(SqliteSessionStorage::new(&conn));
    store.sign_in(Role::Investor);
    drop(store);

    let restored = SessionStore::rehydrate(SqliteSessionStorage::new(&conn));
    assert_eq!(restored.state().role(), Some(Role::Investor));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM client_storage;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}
