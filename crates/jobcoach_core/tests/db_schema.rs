use jobcoach_core::db::schema::{schema_version, stored_version};
use jobcoach_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn in_memory_database_is_at_current_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(stored_version(&conn).unwrap(), schema_version());
    assert_table_exists(&conn, "user_preferences");
}

#[test]
fn reopening_database_file_keeps_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobcoach.db");

    let first = open_db(&path).unwrap();
    assert_eq!(stored_version(&first).unwrap(), schema_version());
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(stored_version(&second).unwrap(), schema_version());
    assert_table_exists(&second, "user_preferences");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 42);
            assert_eq!(supported, schema_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failing_schema_step_names_the_step_and_rolls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clash.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE legacy (id INTEGER);
         CREATE INDEX user_preferences ON legacy (id);",
    )
    .unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaStep { version, name, .. } => {
            assert_eq!(version, 1);
            assert_eq!(name, "user_preferences");
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(stored_version(&conn).unwrap(), 0);
}

#[test]
fn current_version_without_preference_table_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("damaged.db");

    let conn = open_db(&path).unwrap();
    conn.execute_batch("DROP TABLE user_preferences;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::MissingTable(table) => assert_eq!(table, "user_preferences"),
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
