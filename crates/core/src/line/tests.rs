use super::*;
use crate::ids::StationId;

fn station(id: i64) -> Station {
    Station::new(StationId::try_new(id).unwrap(), format!("S{id}"))
}

fn distance(value: i64) -> Distance {
    Distance::try_new(value).unwrap()
}

const A: i64 = 1;
const B: i64 = 2;
const C: i64 = 3;
const D: i64 = 4;
const E: i64 = 5;

fn line_ab(length: i64) -> Line {
    Line::create(
        LineId::try_new(1).unwrap(),
        "Line 2",
        "bg-green-600",
        station(A),
        station(B),
        distance(length),
    )
    .unwrap()
}

fn station_ids(line: &Line) -> Vec<i64> {
    line.stations().iter().map(|s| s.id().get()).collect()
}

fn section_triples(line: &Line) -> Vec<(i64, i64, i64)> {
    line.ordered_sections()
        .iter()
        .map(|s| {
            (
                s.up_station().id().get(),
                s.down_station().id().get(),
                s.distance().get(),
            )
        })
        .collect()
}

#[test]
fn first_section_bootstraps_the_path() {
    let mut line = Line::empty(LineId::try_new(1).unwrap(), "Line 2", "bg-green-600").unwrap();
    assert!(line.is_empty());
    assert!(line.stations().is_empty());

    line.insert_section(station(A), station(B), distance(5)).unwrap();
    assert_eq!(section_triples(&line), vec![(A, B, 5)]);
    assert_eq!(station_ids(&line), vec![A, B]);
}

#[test]
fn split_sharing_up_station() {
    let mut line = line_ab(10);
    line.insert_section(station(A), station(C), distance(4)).unwrap();
    assert_eq!(section_triples(&line), vec![(A, C, 4), (C, B, 6)]);
    assert_eq!(station_ids(&line), vec![A, C, B]);
    assert_eq!(line.total_distance(), 10);
}

#[test]
fn split_sharing_down_station() {
    let mut line = line_ab(10);
    line.insert_section(station(C), station(B), distance(4)).unwrap();
    assert_eq!(section_triples(&line), vec![(A, C, 6), (C, B, 4)]);
    assert_eq!(line.total_distance(), 10);
}

#[test]
fn oversize_split_is_rejected_without_changes() {
    let mut line = line_ab(10);

    let err = line
        .insert_section(station(A), station(C), distance(10))
        .unwrap_err();
    assert_eq!(
        err,
        TopologyError::DistanceConflict {
            requested: 10,
            existing: 10
        }
    );

    let err = line
        .insert_section(station(C), station(B), distance(12))
        .unwrap_err();
    assert_eq!(
        err,
        TopologyError::DistanceConflict {
            requested: 12,
            existing: 10
        }
    );
    assert_eq!(section_triples(&line), vec![(A, B, 10)]);
}

#[test]
fn extension_at_either_end_has_no_distance_limit() {
    let mut line = line_ab(10);
    line.insert_section(station(B), station(C), distance(50)).unwrap();
    line.insert_section(station(D), station(A), distance(30)).unwrap();
    assert_eq!(station_ids(&line), vec![D, A, B, C]);
    assert_eq!(
        section_triples(&line),
        vec![(D, A, 30), (A, B, 10), (B, C, 50)]
    );
}

#[test]
fn interior_attachment_splits_instead_of_branching() {
    let mut line = line_ab(10);
    line.insert_section(station(B), station(C), distance(8)).unwrap();

    // B is interior; a section leaving B splits B-C rather than forking.
    line.insert_section(station(B), station(D), distance(3)).unwrap();
    assert_eq!(station_ids(&line), vec![A, B, D, C]);
    assert_eq!(
        section_triples(&line),
        vec![(A, B, 10), (B, D, 3), (D, C, 5)]
    );

    // Likewise a section entering B splits A-B.
    line.insert_section(station(E), station(B), distance(4)).unwrap();
    assert_eq!(station_ids(&line), vec![A, E, B, D, C]);
}

#[test]
fn duplicate_and_cyclic_sections_are_rejected() {
    let mut line = line_ab(10);
    line.insert_section(station(B), station(C), distance(5)).unwrap();

    assert_eq!(
        line.insert_section(station(A), station(B), distance(3))
            .unwrap_err(),
        TopologyError::DuplicateSection {
            up: StationId::try_new(A).unwrap(),
            down: StationId::try_new(B).unwrap(),
        }
    );
    assert_eq!(
        line.insert_section(station(C), station(A), distance(3))
            .unwrap_err(),
        TopologyError::DuplicateSection {
            up: StationId::try_new(C).unwrap(),
            down: StationId::try_new(A).unwrap(),
        }
    );
    assert_eq!(station_ids(&line), vec![A, B, C]);
}

#[test]
fn disconnected_section_is_rejected() {
    let mut line = line_ab(10);
    assert_eq!(
        line.insert_section(station(C), station(D), distance(3))
            .unwrap_err(),
        TopologyError::DisconnectedInsertion {
            up: StationId::try_new(C).unwrap(),
            down: StationId::try_new(D).unwrap(),
        }
    );
    assert_eq!(section_triples(&line), vec![(A, B, 10)]);
}

#[test]
fn self_loop_is_rejected() {
    let mut line = line_ab(10);
    assert!(matches!(
        line.insert_section(station(A), station(A), distance(3)),
        Err(TopologyError::InvalidInput(_))
    ));
}

#[test]
fn removing_interior_station_merges_sections() {
    let mut line = line_ab(3);
    line.insert_section(station(B), station(C), distance(4)).unwrap();

    line.remove_section(&station(B)).unwrap();
    assert_eq!(section_triples(&line), vec![(A, C, 7)]);
    assert_eq!(station_ids(&line), vec![A, C]);
}

#[test]
fn removing_terminal_station_shortens_the_path() {
    let mut line = line_ab(3);
    line.insert_section(station(B), station(C), distance(4)).unwrap();

    line.remove_section(&station(C)).unwrap();
    assert_eq!(section_triples(&line), vec![(A, B, 3)]);

    line.insert_section(station(B), station(C), distance(4)).unwrap();
    line.remove_section(&station(A)).unwrap();
    assert_eq!(section_triples(&line), vec![(B, C, 4)]);
}

#[test]
fn removing_the_last_section_empties_the_line() {
    let mut line = line_ab(3);
    line.remove_section(&station(A)).unwrap();
    assert!(line.is_empty());
    assert!(line.stations().is_empty());

    assert_eq!(
        line.remove_section(&station(A)).unwrap_err(),
        TopologyError::EmptyRemoval {
            station: StationId::try_new(A).unwrap()
        }
    );
}

#[test]
fn removing_an_absent_station_is_rejected() {
    let mut line = line_ab(3);
    assert_eq!(
        line.remove_section(&station(D)).unwrap_err(),
        TopologyError::EmptyRemoval {
            station: StationId::try_new(D).unwrap()
        }
    );
    assert_eq!(section_triples(&line), vec![(A, B, 3)]);
}

#[test]
fn ordering_is_derived_from_endpoints_not_storage_order() {
    let id = LineId::try_new(1).unwrap();
    let sections = vec![
        Section::create(id, station(C), station(D), distance(1)),
        Section::create(id, station(A), station(B), distance(2)),
        Section::create(id, station(B), station(C), distance(3)),
    ];
    let line = Line::restore(id, "Line 2", "bg-green-600", sections).unwrap();
    assert_eq!(station_ids(&line), vec![A, B, C, D]);
    assert_eq!(station_ids(&line), station_ids(&line));
}

#[test]
fn restore_rejects_broken_paths() {
    let id = LineId::try_new(1).unwrap();
    let sid = |v| StationId::try_new(v).unwrap();

    let branching = vec![
        Section::create(id, station(A), station(B), distance(1)),
        Section::create(id, station(A), station(C), distance(1)),
    ];
    assert_eq!(
        Line::restore(id, "x", "y", branching).unwrap_err(),
        PathViolation::Branch { station: sid(A) }
    );

    let cycle = vec![
        Section::create(id, station(A), station(B), distance(1)),
        Section::create(id, station(B), station(A), distance(1)),
    ];
    assert_eq!(
        Line::restore(id, "x", "y", cycle).unwrap_err(),
        PathViolation::NoStart
    );

    let split = vec![
        Section::create(id, station(A), station(B), distance(1)),
        Section::create(id, station(C), station(D), distance(1)),
    ];
    assert!(matches!(
        Line::restore(id, "x", "y", split).unwrap_err(),
        PathViolation::Disconnected { .. }
    ));

    let path_and_cycle = vec![
        Section::create(id, station(A), station(B), distance(1)),
        Section::create(id, station(C), station(D), distance(1)),
        Section::create(id, station(D), station(C), distance(1)),
    ];
    assert_eq!(
        Line::restore(id, "x", "y", path_and_cycle).unwrap_err(),
        PathViolation::Disconnected {
            reachable: 1,
            sections: 3
        }
    );
}

#[test]
fn restore_rejects_sections_of_another_line() {
    let id = LineId::try_new(1).unwrap();
    let other = LineId::try_new(2).unwrap();
    let sections = vec![
        Section::create(id, station(A), station(B), distance(1)),
        Section::create(other, station(B), station(C), distance(1)),
    ];
    assert_eq!(
        Line::restore(id, "x", "y", sections).unwrap_err(),
        PathViolation::ForeignSection {
            expected: id,
            found: other
        }
    );
}

#[test]
fn update_validates_attributes() {
    let mut line = line_ab(3);
    line.update("Shinbundang", "bg-red-600").unwrap();
    assert_eq!(line.name(), "Shinbundang");
    assert_eq!(line.color(), "bg-red-600");

    assert!(matches!(
        line.update("  ", "bg-red-600"),
        Err(TopologyError::InvalidInput(_))
    ));
    assert_eq!(line.name(), "Shinbundang");
}
