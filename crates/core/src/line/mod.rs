#![forbid(unsafe_code)]

mod path;

pub use path::validate_path;

use crate::error::{PathViolation, TopologyError};
use crate::ids::LineId;
use crate::section::{Distance, Section};
use crate::station::Station;

const MAX_NAME_LEN: usize = 255;

/// A line and the sections it owns. The section vector is unordered storage;
/// every ordered view is derived by walking the path.
#[derive(Clone, Debug)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    sections: Vec<Section>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Insertion {
    ExtendDown,
    ExtendUp,
    SplitFromUp(usize),
    SplitFromDown(usize),
}

impl Insertion {
    fn as_str(self) -> &'static str {
        match self {
            Self::ExtendDown => "extend_down",
            Self::ExtendUp => "extend_up",
            Self::SplitFromUp(_) => "split_from_up",
            Self::SplitFromDown(_) => "split_from_down",
        }
    }
}

impl Line {
    pub fn empty(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, TopologyError> {
        let name = name.into();
        let color = color.into();
        validate_attributes(&name, &color)?;
        Ok(Self {
            id,
            name,
            color,
            sections: Vec::new(),
        })
    }

    /// Builds a line together with its first section.
    pub fn create(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, TopologyError> {
        let mut line = Self::empty(id, name, color)?;
        line.insert_section(up_station, down_station, distance)?;
        Ok(line)
    }

    /// Rebuilds a line from previously saved sections. Every section must
    /// carry `id`.
    pub fn restore(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, PathViolation> {
        if let Some(foreign) = sections.iter().find(|section| section.line() != id) {
            return Err(PathViolation::ForeignSection {
                expected: id,
                found: foreign.line(),
            });
        }
        validate_path(&sections)?;
        Ok(Self {
            id,
            name: name.into(),
            color: color.into(),
            sections,
        })
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sections in storage order, which carries no meaning.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains_station(&self, station: &Station) -> bool {
        self.sections
            .iter()
            .any(|section| section.match_station(station))
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<(), TopologyError> {
        let name = name.into();
        let color = color.into();
        validate_attributes(&name, &color)?;
        self.name = name;
        self.color = color;
        Ok(())
    }

    pub fn insert_section(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<(), TopologyError> {
        if up_station == down_station {
            return Err(TopologyError::InvalidInput(
                "up and down stations must differ",
            ));
        }

        let section = Section::create(self.id, up_station, down_station, distance);
        if self.sections.is_empty() {
            tracing::debug!(
                line = %self.id,
                up = %section.up_station().id(),
                down = %section.down_station().id(),
                distance = %distance,
                "first section inserted"
            );
            self.sections.push(section);
            return Ok(());
        }

        let insertion = self.plan_insertion(&section)?;
        match insertion {
            Insertion::SplitFromUp(index) => {
                self.sections[index].change_up_station_to_down_station(&section)?
            }
            Insertion::SplitFromDown(index) => {
                self.sections[index].change_down_station_to_up_station(&section)?
            }
            Insertion::ExtendDown | Insertion::ExtendUp => {}
        }

        tracing::debug!(
            line = %self.id,
            up = %section.up_station().id(),
            down = %section.down_station().id(),
            distance = %distance,
            case = insertion.as_str(),
            "section inserted"
        );
        self.sections.push(section);
        debug_assert!(validate_path(&self.sections).is_ok());
        Ok(())
    }

    /// Removes `station` from the path. An interior station merges its two
    /// sections; a terminal station drops its only section.
    pub fn remove_section(&mut self, station: &Station) -> Result<(), TopologyError> {
        let incoming = self
            .sections
            .iter()
            .position(|section| section.match_down_station(station));
        let outgoing = self
            .sections
            .iter()
            .position(|section| section.match_up_station(station));

        match (incoming, outgoing) {
            (Some(incoming), Some(outgoing)) => {
                let before = &self.sections[incoming];
                let after = &self.sections[outgoing];
                let distance = before.distance().checked_add(after.distance()).ok_or(
                    TopologyError::InvalidDistance {
                        value: before.distance().get().saturating_add(after.distance().get()),
                    },
                )?;
                let merged = Section::create(
                    self.id,
                    before.up_station().clone(),
                    after.down_station().clone(),
                    distance,
                );

                let (high, low) = if incoming > outgoing {
                    (incoming, outgoing)
                } else {
                    (outgoing, incoming)
                };
                self.sections.remove(high);
                self.sections.remove(low);

                tracing::debug!(
                    line = %self.id,
                    station = %station.id(),
                    up = %merged.up_station().id(),
                    down = %merged.down_station().id(),
                    distance = %distance,
                    "interior station removed, sections merged"
                );
                self.sections.push(merged);
            }
            (Some(index), None) | (None, Some(index)) => {
                self.sections.remove(index);
                tracing::debug!(
                    line = %self.id,
                    station = %station.id(),
                    remaining = self.sections.len(),
                    "terminal station removed"
                );
            }
            (None, None) => {
                return Err(TopologyError::EmptyRemoval {
                    station: station.id(),
                });
            }
        }

        debug_assert!(validate_path(&self.sections).is_ok());
        Ok(())
    }

    /// Stations from the start of the path to its end.
    pub fn stations(&self) -> Vec<Station> {
        let ordered = path::walk(&self.sections);
        let mut stations = Vec::with_capacity(ordered.len() + 1);
        if let Some(first) = ordered.first() {
            stations.push(first.up_station().clone());
        }
        stations.extend(ordered.iter().map(|section| section.down_station().clone()));
        stations
    }

    pub fn ordered_sections(&self) -> Vec<&Section> {
        path::walk(&self.sections)
    }

    pub fn total_distance(&self) -> i64 {
        self.sections
            .iter()
            .map(|section| section.distance().get())
            .sum()
    }

    fn plan_insertion(&self, section: &Section) -> Result<Insertion, TopologyError> {
        let up = section.up_station();
        let down = section.down_station();

        let touches = self.sections.iter().any(|existing| {
            existing.match_up_station_of(section) || existing.match_down_station_of(section)
        });
        if !touches {
            return Err(TopologyError::DisconnectedInsertion {
                up: up.id(),
                down: down.id(),
            });
        }

        match (self.contains_station(up), self.contains_station(down)) {
            (true, true) => Err(TopologyError::DuplicateSection {
                up: up.id(),
                down: down.id(),
            }),
            (true, false) => {
                let split = self
                    .sections
                    .iter()
                    .position(|existing| existing.match_up_station_from_up_station(section));
                match split {
                    Some(index) => {
                        self.check_split(index, section)?;
                        Ok(Insertion::SplitFromUp(index))
                    }
                    None => Ok(Insertion::ExtendDown),
                }
            }
            (false, true) => {
                let split = self
                    .sections
                    .iter()
                    .position(|existing| existing.match_down_station_from_down_station(section));
                match split {
                    Some(index) => {
                        self.check_split(index, section)?;
                        Ok(Insertion::SplitFromDown(index))
                    }
                    None => Ok(Insertion::ExtendUp),
                }
            }
            (false, false) => Err(TopologyError::DisconnectedInsertion {
                up: up.id(),
                down: down.id(),
            }),
        }
    }

    fn check_split(&self, index: usize, section: &Section) -> Result<(), TopologyError> {
        let existing = &self.sections[index];
        if section.is_greater_or_equal_distance(existing) {
            return Err(TopologyError::DistanceConflict {
                requested: section.distance().get(),
                existing: existing.distance().get(),
            });
        }
        Ok(())
    }
}

fn validate_attributes(name: &str, color: &str) -> Result<(), TopologyError> {
    if name.trim().is_empty() {
        return Err(TopologyError::InvalidInput("line name must not be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(TopologyError::InvalidInput("line name is too long"));
    }
    if color.trim().is_empty() {
        return Err(TopologyError::InvalidInput("line color must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
