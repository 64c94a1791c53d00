use bsq_common::error::MapError;
use bsq_core::analysis;

use super::fixtures::{MAP_ERROR, fixture, report};

#[test]
fn wrong_declared_row_count() {
    assert_eq!(report("wrong_count.map"), MAP_ERROR);
    assert!(matches!(
        analysis::solve_file(&fixture("wrong_count.map")),
        Err(MapError::RowCount {
            declared: 9,
            found: 10
        })
    ));
}

#[test]
fn duplicate_marker() {
    assert_eq!(report("duplicate_marker.map"), MAP_ERROR);
}

#[test]
fn unknown_character() {
    assert_eq!(report("unknown_char.map"), MAP_ERROR);
}

#[test]
fn uneven_rows() {
    assert_eq!(report("uneven_rows.map"), MAP_ERROR);
}

#[test]
fn bad_header() {
    assert_eq!(report("bad_header.map"), MAP_ERROR);
}

#[test]
fn empty_file() {
    assert_eq!(report("empty.map"), MAP_ERROR);
    assert!(matches!(
        analysis::solve_file(&fixture("empty.map")),
        Err(MapError::MissingHeader)
    ));
}

#[test]
fn missing_file() {
    assert_eq!(report("does_not_exist.map"), MAP_ERROR);
}
