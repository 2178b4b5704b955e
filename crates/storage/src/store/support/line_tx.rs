#![forbid(unsafe_code)]

use super::super::{StoreError, StoredLine};
use super::station_tx::station_from_row;
use rusqlite::{Connection, OptionalExtension, params};
use subway_core::ids::LineId;
use subway_core::{Distance, Line, Section};

struct LineRow {
    name: String,
    color: String,
    revision: i64,
    created_at_ms: i64,
    updated_at_ms: i64,
}

pub(in crate::store) fn parse_line_id(raw: i64) -> Result<LineId, StoreError> {
    LineId::try_new(raw).map_err(|_| StoreError::InvalidInput("line_id must be positive"))
}

pub(in crate::store) fn load_line_tx(
    conn: &Connection,
    line_id: LineId,
) -> Result<StoredLine, StoreError> {
    let row = conn
        .query_row(
            "SELECT name, color, revision, created_at_ms, updated_at_ms FROM lines WHERE id=?1",
            params![line_id.get()],
            |row| {
                Ok(LineRow {
                    name: row.get(0)?,
                    color: row.get(1)?,
                    revision: row.get(2)?,
                    created_at_ms: row.get(3)?,
                    updated_at_ms: row.get(4)?,
                })
            },
        )
        .optional()?;
    let Some(row) = row else {
        return Err(StoreError::UnknownLine);
    };

    let sections = load_sections_tx(conn, line_id)?;
    let line = Line::restore(line_id, row.name, row.color, sections)
        .map_err(|violation| StoreError::CorruptLine {
            line: line_id,
            violation,
        })?;

    Ok(StoredLine {
        line,
        revision: row.revision,
        created_at_ms: row.created_at_ms,
        updated_at_ms: row.updated_at_ms,
    })
}

fn load_sections_tx(conn: &Connection, line_id: LineId) -> Result<Vec<Section>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT s.up_station_id, up.name, s.down_station_id, down.name, s.distance \
         FROM sections s \
         JOIN stations up ON up.id = s.up_station_id \
         JOIN stations down ON down.id = s.down_station_id \
         WHERE s.line_id=?1 \
         ORDER BY s.id ASC",
    )?;
    let mut rows = stmt.query(params![line_id.get()])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let up = station_from_row(row.get(0)?, row.get(1)?)?;
        let down = station_from_row(row.get(2)?, row.get(3)?)?;
        let distance = Distance::try_new(row.get(4)?)
            .map_err(|_| StoreError::InvalidInput("invalid section distance row"))?;
        out.push(Section::create(line_id, up, down, distance));
    }
    Ok(out)
}

pub(in crate::store) fn line_ids_tx(conn: &Connection) -> Result<Vec<LineId>, StoreError> {
    let mut stmt = conn.prepare("SELECT id FROM lines ORDER BY id ASC")?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(parse_line_id(row.get(0)?)?);
    }
    Ok(out)
}

/// True when a line other than `except` already uses `name`.
pub(in crate::store) fn line_name_taken_tx(
    conn: &Connection,
    name: &str,
    except: Option<LineId>,
) -> Result<bool, StoreError> {
    let existing = conn
        .query_row(
            "SELECT id FROM lines WHERE name=?1",
            params![name],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(match (existing, except) {
        (None, _) => false,
        (Some(id), Some(except)) => id != except.get(),
        (Some(_), None) => true,
    })
}

pub(in crate::store) fn check_revision(
    expected: Option<i64>,
    actual: i64,
) -> Result<(), StoreError> {
    if let Some(expected) = expected
        && expected != actual
    {
        return Err(StoreError::RevisionMismatch { expected, actual });
    }
    Ok(())
}

/// Writes `line` back: attributes, a bumped revision, and a full replacement
/// of its section rows. Returns the new revision.
pub(in crate::store) fn save_line_tx(
    conn: &Connection,
    line: &Line,
    revision: i64,
    now_ms: i64,
) -> Result<i64, StoreError> {
    let new_revision = revision + 1;
    conn.execute(
        "UPDATE lines SET name=?2, color=?3, revision=?4, updated_at_ms=?5 WHERE id=?1",
        params![
            line.id().get(),
            line.name(),
            line.color(),
            new_revision,
            now_ms
        ],
    )?;

    conn.execute(
        "DELETE FROM sections WHERE line_id=?1",
        params![line.id().get()],
    )?;
    let mut insert = conn.prepare(
        "INSERT INTO sections(line_id, up_station_id, down_station_id, distance) \
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for section in line.sections() {
        insert.execute(params![
            line.id().get(),
            section.up_station().id().get(),
            section.down_station().id().get(),
            section.distance().get(),
        ])?;
    }
    Ok(new_revision)
}
