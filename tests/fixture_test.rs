//! Integration tests over input fixtures and configuration files

use kmap::{render, CellValue, Config, Error, Format, Input, Solver, StructuralError};
use std::fs;
use std::path::PathBuf;

fn load_fixture(name: &str) -> Input {
    let path = PathBuf::from("tests/fixtures").join(name);
    let content = fs::read_to_string(&path).expect("Failed to read fixture");
    Input::parse(&content).expect("Failed to parse fixture")
}

#[test]
fn test_majority_fixture() {
    let input = load_fixture("majority.yaml");
    let grid = Solver::default().solve(&input).unwrap();

    let terms: Vec<&str> = grid.legend.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["AB", "BC", "AC"]);

    let on_cells = grid.cells().filter(|c| c.value == CellValue::On).count();
    assert_eq!(on_cells, 4);
    assert!(grid
        .cells()
        .filter(|c| c.value == CellValue::On)
        .all(|c| c.primary_implicant.is_some()));
}

#[test]
fn test_bcd_fixture_with_dont_cares() {
    let input = load_fixture("bcd_segment.json");
    let grid = Solver::default().solve(&input).unwrap();

    assert_eq!(grid.cell(12).unwrap().value, CellValue::DontCare);
    assert_eq!(grid.cell(4).unwrap().value, CellValue::Off);
    assert!(grid.cell(4).unwrap().covering_implicant_indexes.is_empty());
    assert_eq!(grid.cell(15).unwrap().covering_implicant_indexes, vec![0, 1, 2]);
    assert_eq!(grid.cell(10).unwrap().covering_implicant_indexes, vec![0, 2, 3]);
}

#[test]
fn test_malformed_fixture() {
    let input = load_fixture("malformed.yaml");
    assert!(matches!(
        Solver::default().solve(&input),
        Err(Error::Structural(StructuralError::CoveredOutOfRange { .. }))
    ));
}

#[test]
fn test_config_palette_flows_into_output() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("kmap.yaml");
    fs::write(&config_path, "palette: [\"#ff0000\", \"#00ff00\"]\n").unwrap();

    let config = Config::load(&config_path).unwrap();
    let solver = Solver::new(config);
    let grid = solver.solve(&load_fixture("majority.yaml")).unwrap();

    assert_eq!(grid.legend[2].color, "#ff0000");
    assert_eq!(grid.legend[2].color_index, 0);

    let html = render(&grid, Format::Html).unwrap();
    assert!(html.contains("background: #00ff00"));
}

#[test]
fn test_strict_config_accepts_consistent_fixture() {
    let config = Config::from_yaml("validation:\n  strictPatterns: true\n").unwrap();
    let solver = Solver::new(config);
    assert!(solver.solve(&load_fixture("majority.yaml")).is_ok());
    assert!(solver.solve(&load_fixture("bcd_segment.json")).is_ok());
}
