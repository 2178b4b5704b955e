#![forbid(unsafe_code)]

use super::super::StoreError;
use rusqlite::{Connection, OptionalExtension, params};
use subway_core::ids::{LineId, StationId};
use subway_core::{Station, StationResolver};

/// Resolves station ids against whatever connection or transaction it wraps.
pub(in crate::store) struct SqlStations<'a>(pub(in crate::store) &'a Connection);

impl StationResolver for SqlStations<'_> {
    type Error = StoreError;

    fn resolve(&self, ids: &[StationId]) -> Result<Vec<Station>, StoreError> {
        ids.iter()
            .map(|id| {
                station_get_tx(self.0, *id)?
                    .ok_or(StoreError::UnknownStation { station: *id })
            })
            .collect()
    }
}

pub(in crate::store) fn station_get_tx(
    conn: &Connection,
    id: StationId,
) -> Result<Option<Station>, StoreError> {
    let name = conn
        .query_row(
            "SELECT name FROM stations WHERE id=?1",
            params![id.get()],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(name.map(|name| Station::new(id, name)))
}

pub(in crate::store) fn station_name_exists_tx(
    conn: &Connection,
    name: &str,
) -> Result<bool, StoreError> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM stations WHERE name=?1",
            params![name],
            |_| Ok(()),
        )
        .optional()?;
    Ok(exists.is_some())
}

/// First line whose sections still reference `station`, if any.
pub(in crate::store) fn station_usage_tx(
    conn: &Connection,
    station: StationId,
) -> Result<Option<LineId>, StoreError> {
    let line = conn
        .query_row(
            "SELECT line_id FROM sections \
             WHERE up_station_id=?1 OR down_station_id=?1 \
             ORDER BY line_id ASC LIMIT 1",
            params![station.get()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    line.map(|id| LineId::try_new(id).map_err(|_| StoreError::InvalidInput("invalid line row")))
        .transpose()
}

pub(in crate::store) fn station_from_row(id: i64, name: String) -> Result<Station, StoreError> {
    let id = StationId::try_new(id).map_err(|_| StoreError::InvalidInput("invalid station row"))?;
    Ok(Station::new(id, name))
}
