use rusqlite::Connection;
use taskpad_core::db::migrations::latest_version;
use taskpad_core::db::{open_db, open_db_in_memory, DbError};
use taskpad_core::{KeyValueStore, KvError, SqliteKvStore};

#[test]
fn in_memory_database_is_fully_migrated() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert!(table_exists(&conn, "kv_entries"));
}

#[test]
fn reopening_a_file_keeps_schema_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.sqlite3");

    let mut first = SqliteKvStore::open(&path).unwrap();
    first.set("tasks", "[]").unwrap();
    drop(first);

    let second = SqliteKvStore::open(&path).unwrap();
    assert_eq!(schema_version(second.connection()), latest_version());
    assert_eq!(second.get("tasks").unwrap().as_deref(), Some("[]"));
}

#[test]
fn newer_schema_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = SqliteKvStore::open(&path).err().unwrap();
    assert!(matches!(
        err,
        KvError::Db(DbError::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn set_overwrites_previous_value() {
    let mut kv = SqliteKvStore::open_in_memory().unwrap();
    assert_eq!(kv.get("tasks").unwrap(), None);

    kv.set("tasks", "[1]").unwrap();
    kv.set("tasks", "[2]").unwrap();
    kv.set("other", "x").unwrap();

    assert_eq!(kv.get("tasks").unwrap().as_deref(), Some("[2]"));
    let rows: i64 = kv
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 2);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn table_exists(conn: &Connection, table_name: &str) -> bool {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
        [table_name],
        |row| row.get::<_, i64>(0),
    )
    .unwrap()
        == 1
}
