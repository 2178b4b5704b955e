#![forbid(unsafe_code)]

mod config;
mod error;
mod lines;
mod requests;
mod sections;
mod stations;
mod support;
mod types;

pub use config::*;
pub use error::StoreError;
pub use requests::*;
pub use types::*;

use rusqlite::{Connection, TransactionBehavior};
use std::path::{Path, PathBuf};
use subway_core::ids::StationId;
use subway_core::{Station, StationResolver};
use support::*;

/// Page size callers can pass to `list_line_events` when they have no better one.
pub const DEFAULT_EVENTS_LIMIT: usize = 100;

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with(StoreConfig::new(storage_dir))
    }

    pub fn open_with(config: StoreConfig) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.storage_dir)?;

        let db_path = config.db_path();
        let conn = Connection::open(&db_path)?;
        conn.busy_timeout(config.busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        migrate_sqlite_schema(&conn)?;
        tracing::debug!(path = %db_path.display(), "sqlite store opened");

        Ok(Self {
            conn,
            storage_dir: config.storage_dir,
        })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Every mutation of a line runs inside one of these: the write lock is
    /// taken before the section set is read, so concurrent writers of the
    /// same database are serialized.
    fn write_tx(&mut self) -> Result<rusqlite::Transaction<'_>, StoreError> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}

impl StationResolver for SqliteStore {
    type Error = StoreError;

    fn resolve(&self, ids: &[StationId]) -> Result<Vec<Station>, StoreError> {
        SqlStations(&self.conn).resolve(ids)
    }
}

fn to_sqlite_i64(value: usize) -> Result<i64, StoreError> {
    i64::try_from(value).map_err(|_| StoreError::InvalidInput("value exceeds sqlite range"))
}
