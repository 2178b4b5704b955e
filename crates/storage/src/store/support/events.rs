#![forbid(unsafe_code)]

use super::super::{LineEventRow, StoreError};
use rusqlite::{Connection, params};
use subway_core::ids::LineId;

pub(in crate::store) fn insert_event_tx(
    conn: &Connection,
    line: LineId,
    ts_ms: i64,
    event_type: &str,
    payload: serde_json::Value,
) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO line_events(line_id, ts_ms, type, payload_json) VALUES (?1, ?2, ?3, ?4)",
        params![line.get(), ts_ms, event_type, payload.to_string()],
    )?;
    Ok(())
}

pub(in crate::store) fn list_events_tx(
    conn: &Connection,
    line: LineId,
    limit: i64,
) -> Result<Vec<LineEventRow>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT seq, line_id, ts_ms, type, payload_json \
         FROM line_events \
         WHERE line_id=?1 \
         ORDER BY seq ASC \
         LIMIT ?2",
    )?;
    let mut rows = stmt.query(params![line.get(), limit])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(LineEventRow {
            seq: row.get(0)?,
            line_id: row.get(1)?,
            ts_ms: row.get(2)?,
            event_type: row.get(3)?,
            payload_json: row.get(4)?,
        });
    }
    Ok(out)
}
