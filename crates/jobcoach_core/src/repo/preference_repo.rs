//! Preferred salary unit storage contracts and implementations.
//!
//! # Responsibility
//! - Read and write the user's preferred salary display unit.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Last write wins; there is a single writer per profile.
//! - Read paths reject unknown persisted unit names instead of masking them.

use crate::db::DbError;
use crate::model::salary_unit::SalaryUnit;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

const PREFERRED_SALARY_UNIT_KEY: &str = "preferred_salary_unit";

pub type StoreResult<T> = Result<T, StoreError>;

/// Preference persistence error.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted preference: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Profile store slice used by the salary input.
pub trait UnitPreferenceStore {
    /// Returns the stored unit, `None` when the user never picked one.
    fn preferred_unit(&self) -> StoreResult<Option<SalaryUnit>>;
    fn set_preferred_unit(&self, unit: SalaryUnit) -> StoreResult<()>;
}

impl<S: UnitPreferenceStore + ?Sized> UnitPreferenceStore for &S {
    fn preferred_unit(&self) -> StoreResult<Option<SalaryUnit>> {
        (**self).preferred_unit()
    }

    fn set_preferred_unit(&self, unit: SalaryUnit) -> StoreResult<()> {
        (**self).set_preferred_unit(unit)
    }
}

/// Process-local store, for tests and sessions without persistence.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    unit: Cell<Option<SalaryUnit>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(unit: SalaryUnit) -> Self {
        Self {
            unit: Cell::new(Some(unit)),
        }
    }
}

impl UnitPreferenceStore for InMemoryPreferenceStore {
    fn preferred_unit(&self) -> StoreResult<Option<SalaryUnit>> {
        Ok(self.unit.get())
    }

    fn set_preferred_unit(&self, unit: SalaryUnit) -> StoreResult<()> {
        self.unit.set(Some(unit));
        Ok(())
    }
}

/// SQLite-backed preference store.
///
/// Expects a connection returned by `db::open_db*` so the schema exists.
pub struct SqlitePreferenceStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UnitPreferenceStore for SqlitePreferenceStore<'_> {
    fn preferred_unit(&self) -> StoreResult<Option<SalaryUnit>> {
        let stored = self
            .conn
            .query_row(
                "SELECT value FROM user_preferences WHERE key = ?1;",
                [PREFERRED_SALARY_UNIT_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        stored
            .map(|value| {
                value
                    .parse::<SalaryUnit>()
                    .map_err(|err| StoreError::InvalidData(err.to_string()))
            })
            .transpose()
    }

    fn set_preferred_unit(&self, unit: SalaryUnit) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO user_preferences (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![PREFERRED_SALARY_UNIT_KEY, unit.as_str(), now_epoch_ms()],
        )?;
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
