#![forbid(unsafe_code)]

mod cell;
mod error;
mod line;
mod section;
mod station;

pub mod ids;

pub use cell::{LineCell, LineRegistry};
pub use error::{PathViolation, TopologyError};
pub use line::{Line, validate_path};
pub use section::{Distance, Section};
pub use station::{Station, StationCatalog, StationResolver, resolve_pair};
