#![forbid(unsafe_code)]

mod events;
mod line_tx;
mod schema;
mod station_tx;
mod time;

pub(super) use events::*;
pub(super) use line_tx::*;
pub(super) use schema::migrate_sqlite_schema;
pub(super) use station_tx::*;
pub(super) use time::now_ms;
