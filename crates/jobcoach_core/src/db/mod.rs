//! Local SQLite database holding profile preferences.
//!
//! # Responsibility
//! - Open connections with the preference schema in place.
//! - Report schema problems as typed errors the store layer can wrap.
//!
//! # Invariants
//! - A connection handed out by `open_db*` is at `schema::schema_version()`
//!   and has every table the store relies on.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was last written by a build with a newer preference schema.
    SchemaTooNew { found: u32, supported: u32 },
    /// One schema step failed; the whole upgrade was rolled back.
    SchemaStep {
        version: u32,
        name: &'static str,
        source: rusqlite::Error,
    },
    /// Schema version is current but a table the store needs is absent.
    MissingTable(&'static str),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "preference schema version {found} is newer than supported {supported}"
            ),
            Self::SchemaStep {
                version,
                name,
                source,
            } => write!(f, "preference schema step {version} `{name}` failed: {source}"),
            Self::MissingTable(table) => write!(f, "preference table `{table}` is missing"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) | Self::SchemaStep { source: err, .. } => Some(err),
            Self::SchemaTooNew { .. } | Self::MissingTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
