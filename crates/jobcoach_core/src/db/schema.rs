//! Preference schema steps and upgrade.
//!
//! Step `n` of `SCHEMA_STEPS` brings the database to version `n + 1`; the
//! reached version is kept in `PRAGMA user_version`. Steps are append-only.

use super::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    name: "user_preferences",
    sql: include_str!("sql/0001_user_preferences.sql"),
}];

/// Tables `SqlitePreferenceStore` reads and writes.
const REQUIRED_TABLES: &[&str] = &["user_preferences"];

/// Schema version this build writes.
pub fn schema_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Version recorded in the database file, `0` for a fresh file.
pub fn stored_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

/// Brings `conn` to `schema_version()` and checks the required tables.
///
/// All pending steps run in one transaction.
pub fn upgrade_schema(conn: &mut Connection) -> DbResult<()> {
    let found = stored_version(conn)?;
    let supported = schema_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    if found < supported {
        let tx = conn.transaction()?;
        for (version, step) in (found + 1..).zip(&SCHEMA_STEPS[found as usize..]) {
            tx.execute_batch(step.sql)
                .map_err(|source| DbError::SchemaStep {
                    version,
                    name: step.name,
                    source,
                })?;
            info!(
                "event=db_schema module=db status=ok version={version} step={}",
                step.name
            );
        }
        tx.pragma_update(None, "user_version", supported)?;
        tx.commit()?;
    }

    verify_required_tables(conn)
}

fn verify_required_tables(conn: &Connection) -> DbResult<()> {
    for &table in REQUIRED_TABLES {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(DbError::MissingTable(table));
        }
    }
    Ok(())
}
