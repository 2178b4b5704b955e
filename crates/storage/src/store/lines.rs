#![forbid(unsafe_code)]

use super::*;
use rusqlite::params;
use serde_json::json;
use subway_core::{Distance, Line, resolve_pair};

impl SqliteStore {
    /// Creates a line together with its first section. The line row, its
    /// section and the `line_created` event commit together or not at all.
    pub fn create_line(&mut self, request: CreateLineRequest) -> Result<StoredLine, StoreError> {
        let up_id = stations::parse_station_id(request.up_station_id)?;
        let down_id = stations::parse_station_id(request.down_station_id)?;
        let distance = Distance::try_new(request.distance)?;
        let name = request.name.trim().to_string();
        let color = request.color.trim().to_string();

        let now_ms = now_ms();
        let tx = self.write_tx()?;
        if line_name_taken_tx(&tx, &name, None)? {
            return Err(StoreError::LineNameTaken);
        }
        let (up, down) = resolve_pair(&SqlStations(&tx), up_id, down_id)?;

        tx.execute(
            "INSERT INTO lines(name, color, revision, created_at_ms, updated_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![name, color, 0i64, now_ms, now_ms],
        )?;
        let line_id = parse_line_id(tx.last_insert_rowid())?;
        let line = Line::create(line_id, name, color, up, down, distance)?;
        let revision = save_line_tx(&tx, &line, 0, now_ms)?;

        insert_event_tx(
            &tx,
            line_id,
            now_ms,
            "line_created",
            json!({
                "name": line.name(),
                "color": line.color(),
                "up_station_id": up_id.get(),
                "down_station_id": down_id.get(),
                "distance": distance.get(),
            }),
        )?;
        tx.commit()?;

        tracing::info!(line = %line_id, name = line.name(), revision, "line created");
        Ok(StoredLine {
            line,
            revision,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        })
    }

    pub fn get_line(&self, line_id: i64) -> Result<StoredLine, StoreError> {
        let line_id = parse_line_id(line_id)?;
        load_line_tx(&self.conn, line_id)
    }

    pub fn list_lines(&self) -> Result<Vec<StoredLine>, StoreError> {
        line_ids_tx(&self.conn)?
            .into_iter()
            .map(|id| load_line_tx(&self.conn, id))
            .collect()
    }

    pub fn update_line(&mut self, request: UpdateLineRequest) -> Result<StoredLine, StoreError> {
        let line_id = parse_line_id(request.line_id)?;
        let name = request.name.trim().to_string();
        let color = request.color.trim().to_string();

        let now_ms = now_ms();
        let tx = self.write_tx()?;
        let mut stored = load_line_tx(&tx, line_id)?;
        check_revision(request.expected_revision, stored.revision)?;
        if line_name_taken_tx(&tx, &name, Some(line_id))? {
            return Err(StoreError::LineNameTaken);
        }

        stored.line.update(name, color)?;
        let revision = save_line_tx(&tx, &stored.line, stored.revision, now_ms)?;
        insert_event_tx(
            &tx,
            line_id,
            now_ms,
            "line_updated",
            json!({
                "name": stored.line.name(),
                "color": stored.line.color(),
            }),
        )?;
        tx.commit()?;

        tracing::info!(line = %line_id, revision, "line updated");
        stored.revision = revision;
        stored.updated_at_ms = now_ms;
        Ok(stored)
    }

    pub fn delete_line(&mut self, line_id: i64) -> Result<(), StoreError> {
        let line_id = parse_line_id(line_id)?;

        let now_ms = now_ms();
        let tx = self.write_tx()?;
        let stored = load_line_tx(&tx, line_id)?;
        tx.execute(
            "DELETE FROM sections WHERE line_id=?1",
            params![line_id.get()],
        )?;
        tx.execute("DELETE FROM lines WHERE id=?1", params![line_id.get()])?;
        insert_event_tx(
            &tx,
            line_id,
            now_ms,
            "line_deleted",
            json!({
                "name": stored.line.name(),
                "revision": stored.revision,
            }),
        )?;
        tx.commit()?;

        tracing::info!(line = %line_id, "line deleted");
        Ok(())
    }

    /// Mutation log of one line, oldest first. Survives line deletion.
    pub fn list_line_events(
        &self,
        line_id: i64,
        limit: usize,
    ) -> Result<Vec<LineEventRow>, StoreError> {
        let line_id = parse_line_id(line_id)?;
        list_events_tx(&self.conn, line_id, to_sqlite_i64(limit)?)
    }
}
