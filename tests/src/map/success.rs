use bsq_common::layer::Layer;
use bsq_common::map::position::Position;
use bsq_core::analysis;
use bsq_core::finder::BestSquare;

use super::fixtures::{MAP_ERROR, fixture, report, report_layer};

const SAMPLE_SOLVED: &str = "\
...xxxxxx...........
o..xxxxxx.o....o....
..oxxxxxx....o...oo.
..oxxxxxx...o.......
...xxxxxx...........
o..xxxxxx.......o...
.....o.o............
....................
...o......o....o...o
o...............o...
";

#[test]
fn sample_map_is_solved() {
    assert_eq!(report("success.map"), SAMPLE_SOLVED);
}

#[test]
fn sample_map_best_square() -> anyhow::Result<()> {
    let solved = analysis::solve_file(&fixture("success.map"))?;
    assert_eq!(
        solved.best,
        Some(BestSquare {
            corner: Position::new(0, 3),
            size: 6
        })
    );
    Ok(())
}

#[test]
fn sample_map_size_layer_peaks_at_corner() -> anyhow::Result<()> {
    let solved = analysis::solve_file(&fixture("success.map"))?;
    let largest = solved.sizes.iter().map(|(_, size)| *size).max();
    assert_eq!(largest, Some(6));
    assert_eq!(solved.sizes[Position::new(0, 3)], 6);

    let sizes: String = report_layer("success.map", Layer::Sizes);
    assert_eq!(sizes.lines().count(), 10);
    Ok(())
}

#[test]
fn sample_map_runs_layer() {
    let runs: String = report_layer("success.map", Layer::Runs);
    let first: Vec<&str> = runs.lines().next().unwrap().split_whitespace().collect();
    // Column 0 of the first row: one empty cell before the obstacle below it.
    assert_eq!(first[0], "1");
    // Column 1 is empty all the way down.
    assert_eq!(first[1], "10");
    assert_eq!(first.len(), 20);
}

#[test]
fn blank_lines_are_counted_but_not_printed() {
    assert_eq!(report("blank_line.map"), ".xx\noxx\n...\n");
}

#[test]
fn obstacle_marker_may_equal_full_marker() {
    assert_eq!(report("obstacle_is_full.map"), ".ooo\n..oo\n....\n");
}

#[test]
fn map_without_empty_cells_is_printed_unchanged() {
    assert_eq!(report("no_empty.map"), "ooo\nooo\n");
}

#[test]
fn maps_are_reported_independently() {
    let names = ["bad_header.map", "success.map", "uneven_rows.map", "no_empty.map"];
    let output: String = names.iter().map(|name| report(name)).collect();

    let expected: String = [MAP_ERROR, SAMPLE_SOLVED, MAP_ERROR, "ooo\nooo\n"].concat();
    assert_eq!(output, expected);
}
