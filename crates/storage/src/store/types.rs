#![forbid(unsafe_code)]

use subway_core::Line;

/// A line as loaded from storage, with its bookkeeping columns.
#[derive(Clone, Debug)]
pub struct StoredLine {
    pub line: Line,
    pub revision: i64,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineEventRow {
    pub seq: i64,
    pub line_id: i64,
    pub ts_ms: i64,
    pub event_type: String,
    pub payload_json: String,
}

impl LineEventRow {
    pub fn event_id(&self) -> String {
        format!("evt_{:016}", self.seq)
    }
}
