#![forbid(unsafe_code)]

use crate::error::TopologyError;
use crate::ids::StationId;
use std::collections::BTreeMap;

/// A station record as handed out by a [`StationResolver`]. Identity is the id;
/// the name is display data only.
#[derive(Clone, Debug)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl std::hash::Hash for Station {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

pub trait StationResolver {
    type Error: From<TopologyError>;

    /// Returns one record per requested id, in request order, or `NotFound`
    /// for the first id that has no record.
    fn resolve(&self, ids: &[StationId]) -> Result<Vec<Station>, Self::Error>;
}

pub fn resolve_pair<R: StationResolver + ?Sized>(
    resolver: &R,
    up: StationId,
    down: StationId,
) -> Result<(Station, Station), R::Error> {
    let mut stations = resolver.resolve(&[up, down])?.into_iter();
    match (stations.next(), stations.next()) {
        (Some(up), Some(down)) => Ok((up, down)),
        (Some(_), None) => Err(TopologyError::NotFound { station: down }.into()),
        _ => Err(TopologyError::NotFound { station: up }.into()),
    }
}

#[derive(Clone, Debug, Default)]
pub struct StationCatalog {
    stations: BTreeMap<StationId, Station>,
}

impl StationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, station: Station) -> Option<Station> {
        self.stations.insert(station.id(), station)
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl StationResolver for StationCatalog {
    type Error = TopologyError;

    fn resolve(&self, ids: &[StationId]) -> Result<Vec<Station>, TopologyError> {
        ids.iter()
            .map(|id| {
                self.stations
                    .get(id)
                    .cloned()
                    .ok_or(TopologyError::NotFound { station: *id })
            })
            .collect()
    }
}
