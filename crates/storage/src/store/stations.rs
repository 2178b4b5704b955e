#![forbid(unsafe_code)]

use super::*;
use rusqlite::params;

const MAX_STATION_NAME_LEN: usize = 255;

impl SqliteStore {
    pub fn create_station(&mut self, name: &str) -> Result<Station, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput("station name must not be empty"));
        }
        if name.len() > MAX_STATION_NAME_LEN {
            return Err(StoreError::InvalidInput("station name is too long"));
        }

        let now_ms = now_ms();
        let tx = self.write_tx()?;
        if station_name_exists_tx(&tx, name)? {
            return Err(StoreError::StationNameTaken);
        }
        tx.execute(
            "INSERT INTO stations(name, created_at_ms) VALUES (?1, ?2)",
            params![name, now_ms],
        )?;
        let station = station_from_row(tx.last_insert_rowid(), name.to_string())?;
        tx.commit()?;

        tracing::info!(station = %station.id(), name, "station created");
        Ok(station)
    }

    pub fn get_station(&self, station_id: i64) -> Result<Option<Station>, StoreError> {
        let id = parse_station_id(station_id)?;
        station_get_tx(&self.conn, id)
    }

    pub fn list_stations(&self) -> Result<Vec<Station>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM stations ORDER BY id ASC")?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(station_from_row(row.get(0)?, row.get(1)?)?);
        }
        Ok(out)
    }

    /// Deletes a station that no line references any more.
    pub fn delete_station(&mut self, station_id: i64) -> Result<(), StoreError> {
        let id = parse_station_id(station_id)?;

        let tx = self.write_tx()?;
        if station_get_tx(&tx, id)?.is_none() {
            return Err(StoreError::UnknownStation { station: id });
        }
        if let Some(line) = station_usage_tx(&tx, id)? {
            return Err(StoreError::StationInUse { station: id, line });
        }
        tx.execute("DELETE FROM stations WHERE id=?1", params![id.get()])?;
        tx.commit()?;

        tracing::info!(station = %id, "station deleted");
        Ok(())
    }
}

pub(super) fn parse_station_id(raw: i64) -> Result<StationId, StoreError> {
    StationId::try_new(raw).map_err(|_| StoreError::InvalidInput("station_id must be positive"))
}
