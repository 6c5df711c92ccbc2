//! Repository layer over the table store.
//!
//! # Responsibility
//! - Define per-collection data access contracts (create, read, partial
//!   update, delete).
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Writes call the record's `validate()` before any SQL mutation.
//! - Reads reject corrupt persisted enum/list values instead of masking them.
//! - Failures are returned, never swallowed; callers pick fallbacks.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod milestone_repo;
pub mod pitch_repo;
pub mod startup_repo;
pub mod task_repo;
pub mod team_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every collection.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound {
        collection: &'static str,
        id: String,
    },
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { collection, id } => write!(f, "{collection} record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Generates an opaque id for a new record.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn not_found(collection: &'static str, id: &str) -> RepoError {
    RepoError::NotFound {
        collection,
        id: id.to_string(),
    }
}

/// Decodes an enum column through its `parse` function.
pub(crate) fn parse_column<T>(
    value: &str,
    column: &'static str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> RepoResult<T> {
    parse(value).ok_or_else(|| RepoError::InvalidData(format!("invalid value `{value}` in {column}")))
}

/// String lists are stored as JSON arrays.
pub(crate) fn encode_list(values: &[String]) -> RepoResult<String> {
    serde_json::to_string(values)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode list: {err}")))
}

pub(crate) fn decode_list(raw: &str, column: &'static str) -> RepoResult<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|_| RepoError::InvalidData(format!("invalid JSON list `{raw}` in {column}")))
}

/// Checks that a connection carries the tables a repository needs.
pub(crate) fn ensure_tables(conn: &Connection, tables: &[&'static str]) -> RepoResult<()> {
    for table in tables {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }
    Ok(())
}
