#![forbid(unsafe_code)]

use crate::ids::{LineId, StationId};

/// Rejections raised by a line mutation. Every variant is an input or state
/// conflict; none of them is transient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    NotFound {
        station: StationId,
    },
    DuplicateSection {
        up: StationId,
        down: StationId,
    },
    DistanceConflict {
        requested: i64,
        existing: i64,
    },
    DisconnectedInsertion {
        up: StationId,
        down: StationId,
    },
    InvalidDistance {
        value: i64,
    },
    EmptyRemoval {
        station: StationId,
    },
    InvalidInput(&'static str),
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { station } => write!(f, "station not found ({station})"),
            Self::DuplicateSection { up, down } => {
                write!(f, "section already registered (up={up}, down={down})")
            }
            Self::DistanceConflict {
                requested,
                existing,
            } => write!(
                f,
                "distance conflict (requested={requested}, existing={existing})"
            ),
            Self::DisconnectedInsertion { up, down } => write!(
                f,
                "section does not touch the line (up={up}, down={down})"
            ),
            Self::InvalidDistance { value } => {
                write!(f, "distance must be a positive integer (got {value})")
            }
            Self::EmptyRemoval { station } => {
                write!(f, "nothing to remove for {station}")
            }
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
        }
    }
}

impl std::error::Error for TopologyError {}

/// Ways a section set can fail to be a single simple path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathViolation {
    SelfLoop { station: StationId },
    DuplicatePair { up: StationId, down: StationId },
    Branch { station: StationId },
    NoStart,
    Disconnected { reachable: usize, sections: usize },
    ForeignSection { expected: LineId, found: LineId },
}

impl std::fmt::Display for PathViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfLoop { station } => write!(f, "section loops on {station}"),
            Self::DuplicatePair { up, down } => {
                write!(f, "duplicate section (up={up}, down={down})")
            }
            Self::Branch { station } => write!(f, "path branches at {station}"),
            Self::NoStart => write!(f, "path has no start station (cycle)"),
            Self::Disconnected {
                reachable,
                sections,
            } => write!(
                f,
                "path is disconnected (reachable={reachable}, sections={sections})"
            ),
            Self::ForeignSection { expected, found } => {
                write!(f, "section of {found} stored under {expected}")
            }
        }
    }
}

impl std::error::Error for PathViolation {}
