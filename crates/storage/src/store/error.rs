#![forbid(unsafe_code)]

use subway_core::ids::{LineId, StationId};
use subway_core::{PathViolation, TopologyError};

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Sql(rusqlite::Error),
    InvalidInput(&'static str),
    Topology(TopologyError),
    RevisionMismatch {
        expected: i64,
        actual: i64,
    },
    UnknownLine,
    UnknownStation {
        station: StationId,
    },
    LineNameTaken,
    StationNameTaken,
    StationInUse {
        station: StationId,
        line: LineId,
    },
    CorruptLine {
        line: LineId,
        violation: PathViolation,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Sql(err) => write!(f, "sqlite: {err}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::Topology(err) => write!(f, "topology: {err}"),
            Self::RevisionMismatch { expected, actual } => {
                write!(
                    f,
                    "revision mismatch (expected={expected}, actual={actual})"
                )
            }
            Self::UnknownLine => write!(f, "unknown line"),
            Self::UnknownStation { station } => write!(f, "unknown station ({station})"),
            Self::LineNameTaken => write!(f, "line name already exists"),
            Self::StationNameTaken => write!(f, "station name already exists"),
            Self::StationInUse { station, line } => {
                write!(f, "station in use ({station} on {line})")
            }
            Self::CorruptLine { line, violation } => {
                write!(f, "stored sections of {line} are corrupt: {violation}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Sql(err) => Some(err),
            Self::Topology(err) => Some(err),
            Self::CorruptLine { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sql(value)
    }
}

impl From<TopologyError> for StoreError {
    fn from(value: TopologyError) -> Self {
        match value {
            TopologyError::NotFound { station } => Self::UnknownStation { station },
            other => Self::Topology(other),
        }
    }
}
