#![forbid(unsafe_code)]

use crate::error::PathViolation;
use crate::ids::StationId;
use crate::section::Section;
use std::collections::{HashMap, HashSet};

/// Checks that `sections` form one simple path (or nothing at all).
pub fn validate_path(sections: &[Section]) -> Result<(), PathViolation> {
    if sections.is_empty() {
        return Ok(());
    }

    let mut pairs = HashSet::new();
    let mut outgoing: HashSet<StationId> = HashSet::new();
    let mut incoming: HashSet<StationId> = HashSet::new();
    for section in sections {
        let up = section.up_station().id();
        let down = section.down_station().id();
        if up == down {
            return Err(PathViolation::SelfLoop { station: up });
        }
        if !pairs.insert((up, down)) {
            return Err(PathViolation::DuplicatePair { up, down });
        }
        if !outgoing.insert(up) {
            return Err(PathViolation::Branch { station: up });
        }
        if !incoming.insert(down) {
            return Err(PathViolation::Branch { station: down });
        }
    }

    let starts = outgoing.difference(&incoming).count();
    if starts == 0 {
        return Err(PathViolation::NoStart);
    }

    let reachable = walk(sections).len();
    if starts > 1 || reachable != sections.len() {
        return Err(PathViolation::Disconnected {
            reachable,
            sections: sections.len(),
        });
    }
    Ok(())
}

/// Follows the path from its start station. The walk is bounded by the number
/// of sections, so a broken set yields a short result instead of looping.
pub(crate) fn walk(sections: &[Section]) -> Vec<&Section> {
    let downs: HashSet<StationId> = sections
        .iter()
        .map(|section| section.down_station().id())
        .collect();
    let by_up: HashMap<StationId, &Section> = sections
        .iter()
        .map(|section| (section.up_station().id(), section))
        .collect();

    let Some(mut current) = sections
        .iter()
        .find(|section| !downs.contains(&section.up_station().id()))
    else {
        return Vec::new();
    };

    let mut ordered = Vec::with_capacity(sections.len());
    loop {
        ordered.push(current);
        if ordered.len() == sections.len() {
            break;
        }
        match by_up.get(&current.down_station().id()) {
            Some(&next) => current = next,
            None => break,
        }
    }
    ordered
}
