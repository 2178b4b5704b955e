#![forbid(unsafe_code)]

use super::*;
use serde_json::json;
use subway_core::{Distance, resolve_pair};

impl SqliteStore {
    /// Loads the line, resolves both stations, inserts the section through the
    /// topology engine and saves the result. Any rejection rolls back.
    pub fn add_section(&mut self, request: AddSectionRequest) -> Result<StoredLine, StoreError> {
        let line_id = parse_line_id(request.line_id)?;
        let up_id = stations::parse_station_id(request.up_station_id)?;
        let down_id = stations::parse_station_id(request.down_station_id)?;
        let distance = Distance::try_new(request.distance)?;

        let now_ms = now_ms();
        let tx = self.write_tx()?;
        let mut stored = load_line_tx(&tx, line_id)?;
        check_revision(request.expected_revision, stored.revision)?;
        let (up, down) = resolve_pair(&SqlStations(&tx), up_id, down_id)?;

        stored.line.insert_section(up, down, distance)?;
        let revision = save_line_tx(&tx, &stored.line, stored.revision, now_ms)?;
        insert_event_tx(
            &tx,
            line_id,
            now_ms,
            "section_added",
            json!({
                "up_station_id": up_id.get(),
                "down_station_id": down_id.get(),
                "distance": distance.get(),
            }),
        )?;
        tx.commit()?;

        tracing::info!(
            line = %line_id,
            up = %up_id,
            down = %down_id,
            distance = distance.get(),
            revision,
            "section added"
        );
        stored.revision = revision;
        stored.updated_at_ms = now_ms;
        Ok(stored)
    }

    pub fn remove_section(
        &mut self,
        request: RemoveSectionRequest,
    ) -> Result<StoredLine, StoreError> {
        let line_id = parse_line_id(request.line_id)?;
        let station_id = stations::parse_station_id(request.station_id)?;

        let now_ms = now_ms();
        let tx = self.write_tx()?;
        let mut stored = load_line_tx(&tx, line_id)?;
        check_revision(request.expected_revision, stored.revision)?;
        let station = SqlStations(&tx)
            .resolve(&[station_id])?
            .into_iter()
            .next()
            .ok_or(StoreError::InvalidInput("station lookup returned nothing"))?;

        stored.line.remove_section(&station)?;
        let revision = save_line_tx(&tx, &stored.line, stored.revision, now_ms)?;
        insert_event_tx(
            &tx,
            line_id,
            now_ms,
            "section_removed",
            json!({
                "station_id": station_id.get(),
                "remaining_sections": stored.line.sections().len(),
            }),
        )?;
        tx.commit()?;

        tracing::info!(
            line = %line_id,
            station = %station_id,
            revision,
            "section removed"
        );
        stored.revision = revision;
        stored.updated_at_ms = now_ms;
        Ok(stored)
    }
}
