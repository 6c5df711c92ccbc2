use pitchflow_core::db::migrations::{current_user_version, latest_version};
use pitchflow_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

const DOMAIN_TABLES: [&str; 6] = [
    "startups",
    "milestones",
    "tasks",
    "team_members",
    "pitch_requests",
    "client_storage",
];

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    for table in DOMAIN_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pitchflow.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO client_storage (key, value) VALUES ('k', 'v');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(current_user_version(&second).unwrap(), latest_version());
    let value: String = second
        .query_row("SELECT value FROM client_storage WHERE key = 'k';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(value, "v");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failing_migration_is_named_and_rolled_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conflict.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE pitch_requests (id TEXT);")
        .unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::Migration { version, name, .. } => {
            assert_eq!(version, 1);
            assert_eq!(name, "domain_tables");
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), 0);
    let startups: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'startups';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(startups, 0);
}

#[test]
fn foreign_keys_cascade_milestones_with_their_startup() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO startups (id, founder_id, name, stage, team_id)
         VALUES ('s-1', 'f-1', 'TechFlow AI', 'mvp', 'TF-AAAAAA');
         INSERT INTO milestones (id, startup_id, title, status, priority)
         VALUES ('m-1', 's-1', 'MVP Launch', 'active', 'high');
         DELETE FROM startups WHERE id = 's-1';",
    )
    .unwrap();

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM milestones;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn check_constraints_reject_unknown_status_text() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO tasks (id, title, priority, status) VALUES ('t-1', 'x', 'high', 'done');",
        [],
    );
    assert!(result.is_err());
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
