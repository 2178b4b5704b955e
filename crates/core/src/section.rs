#![forbid(unsafe_code)]

use crate::error::TopologyError;
use crate::ids::LineId;
use crate::station::Station;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(i64);

impl Distance {
    pub fn get(self) -> i64 {
        self.0
    }

    pub fn try_new(value: i64) -> Result<Self, TopologyError> {
        if value <= 0 {
            return Err(TopologyError::InvalidDistance { value });
        }
        Ok(Self(value))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// `None` unless the remainder stays strictly positive.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(rest) if rest > 0 => Some(Self(rest)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One directed edge of a line. Two sections are equal when they belong to the
/// same line and join the same ordered pair of stations; distance does not
/// take part.
#[derive(Clone, Debug)]
pub struct Section {
    line: LineId,
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Section {
    pub fn create(
        line: LineId,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Self {
        Self {
            line,
            up_station,
            down_station,
            distance,
        }
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn match_station(&self, station: &Station) -> bool {
        self.up_station == *station || self.down_station == *station
    }

    pub fn match_up_station(&self, station: &Station) -> bool {
        self.up_station == *station
    }

    /// True when this section starts at either endpoint of `section`.
    pub fn match_up_station_of(&self, section: &Section) -> bool {
        self.match_up_station(&section.up_station) || self.match_up_station(&section.down_station)
    }

    pub fn match_down_station(&self, station: &Station) -> bool {
        self.down_station == *station
    }

    /// True when this section ends at either endpoint of `section`.
    pub fn match_down_station_of(&self, section: &Section) -> bool {
        self.match_down_station(&section.up_station)
            || self.match_down_station(&section.down_station)
    }

    pub fn match_up_station_from_up_station(&self, section: &Section) -> bool {
        self.up_station == section.up_station
    }

    pub fn match_down_station_from_down_station(&self, section: &Section) -> bool {
        self.down_station == section.down_station
    }

    pub fn is_greater_or_equal_distance(&self, section: &Section) -> bool {
        self.distance >= section.distance
    }

    /// Shrinks this section to the part after `section`: the up-station moves
    /// to `section`'s down-station and the distance drops by `section`'s.
    pub(crate) fn change_up_station_to_down_station(
        &mut self,
        section: &Section,
    ) -> Result<(), TopologyError> {
        let distance = self.shrunk_distance(section)?;
        self.up_station = section.down_station.clone();
        self.distance = distance;
        Ok(())
    }

    /// Shrinks this section to the part before `section`: the down-station
    /// moves to `section`'s up-station and the distance drops by `section`'s.
    pub(crate) fn change_down_station_to_up_station(
        &mut self,
        section: &Section,
    ) -> Result<(), TopologyError> {
        let distance = self.shrunk_distance(section)?;
        self.down_station = section.up_station.clone();
        self.distance = distance;
        Ok(())
    }

    fn shrunk_distance(&self, section: &Section) -> Result<Distance, TopologyError> {
        self.distance
            .checked_sub(section.distance)
            .ok_or(TopologyError::DistanceConflict {
                requested: section.distance.get(),
                existing: self.distance.get(),
            })
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line
            && self.up_station == other.up_station
            && self.down_station == other.down_station
    }
}

impl Eq for Section {}

impl std::hash::Hash for Section {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.line.hash(state);
        self.up_station.hash(state);
        self.down_station.hash(state);
    }
}
