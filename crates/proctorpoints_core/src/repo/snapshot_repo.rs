//! Snapshot blob store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the whole snapshot as one opaque JSON value under a single key.
//! - Keep SQL and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - The store never interprets snapshot contents; it moves the blob whole.
//! - A load failure is reported upward, never masked; the session decides
//!   the fallback.

use crate::db::DbError;
use crate::model::snapshot::Snapshot;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the snapshot blob. The spelling is kept byte-for-byte from
/// earlier builds so existing stores keep loading.
pub const SNAPSHOT_KEY: &str = "examProctoringSytem";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure for snapshot load/save operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
    /// The stored blob exists but is not a parseable snapshot.
    MalformedBlob {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
            Self::MalformedBlob { key, source } => {
                write!(f, "stored snapshot under `{key}` is malformed: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::MalformedBlob { source, .. } => Some(source),
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

/// Store interface for the snapshot blob.
pub trait SnapshotStore {
    /// Loads the stored snapshot, `None` when nothing was saved yet.
    fn load(&self) -> StoreResult<Option<Snapshot>>;
    /// Writes the full snapshot back, replacing any previous blob.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()>;
}

/// SQLite-backed blob store keeping one row per key.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    /// Store over the default snapshot key.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, SNAPSHOT_KEY)
    }

    /// Store over a caller-chosen key; used by tests and tooling.
    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM snapshots WHERE key = ?1;",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        match body {
            None => Ok(None),
            Some(body) => serde_json::from_str(&body)
                .map(Some)
                .map_err(|source| StoreError::MalformedBlob {
                    key: self.key.clone(),
                    source,
                }),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let body = serde_json::to_string(snapshot).map_err(StoreError::Serialize)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![self.key, body],
        )?;
        Ok(())
    }
}
