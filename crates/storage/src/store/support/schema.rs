#![forbid(unsafe_code)]

use super::super::StoreError;
use rusqlite::{Connection, params};

const SCHEMA_VERSION: &str = "v1";

const SQL: &str = r#"
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=NORMAL;

        CREATE TABLE IF NOT EXISTS meta (
          key TEXT PRIMARY KEY,
          value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS stations (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL UNIQUE,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS lines (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL UNIQUE,
          color TEXT NOT NULL,
          revision INTEGER NOT NULL,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL
        );

        -- One row per section; the row order carries no meaning.
        CREATE TABLE IF NOT EXISTS sections (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          line_id INTEGER NOT NULL REFERENCES lines(id) ON DELETE CASCADE,
          up_station_id INTEGER NOT NULL REFERENCES stations(id),
          down_station_id INTEGER NOT NULL REFERENCES stations(id),
          distance INTEGER NOT NULL CHECK (distance > 0),
          UNIQUE (line_id, up_station_id, down_station_id)
        );

        CREATE TABLE IF NOT EXISTS line_events (
          seq INTEGER PRIMARY KEY AUTOINCREMENT,
          line_id INTEGER NOT NULL,
          ts_ms INTEGER NOT NULL,
          type TEXT NOT NULL,
          payload_json TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sections_line ON sections(line_id);
        CREATE INDEX IF NOT EXISTS idx_sections_up_station ON sections(up_station_id);
        CREATE INDEX IF NOT EXISTS idx_sections_down_station ON sections(down_station_id);
        CREATE INDEX IF NOT EXISTS idx_line_events_line_seq ON line_events(line_id, seq);
"#;

pub(in crate::store) fn migrate_sqlite_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SQL)?;
    conn.execute(
        "INSERT OR IGNORE INTO meta(key, value) VALUES (?1, ?2)",
        params!["schema_version", SCHEMA_VERSION],
    )?;
    tracing::debug!(version = SCHEMA_VERSION, "sqlite schema installed");
    Ok(())
}
