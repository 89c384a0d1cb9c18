// tests/load_e2e.rs
//
// End-to-end over the loader: temp file on disk → dataset → views/markers.

use std::fs;
use std::path::PathBuf;

use gridmap::geo::Coord;
use gridmap::load::load_dataset;
use gridmap::view;

fn tmp_file(name: &str, contents: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("gridmap_e2e_{}.csv", name));
    fs::write(&p, contents).unwrap();
    p
}

#[test]
fn full_pipeline_over_reference_input() {
    let text = "season;location;score\n2023;Buffalo Bills;24\n2023;;17\n;Miami Dolphins;\n";
    let p = tmp_file("pipeline", text);

    let (ds, diags) = load_dataset(p.to_str().unwrap()).unwrap();

    // Rows two and three are partially empty but retained.
    assert_eq!(ds.len(), 3);
    assert!(diags.is_empty());

    assert_eq!(view::distinct_sorted_seasons(&ds), vec!["2023"]);

    let markers = view::marker_data(&ds);
    assert_eq!(markers.len(), 2);

    let bills = markers.iter().find(|m| m.label == "Buffalo Bills").unwrap();
    assert_eq!(bills.count, 1);
    assert_eq!(bills.coord, Coord { lat: 42.7738, lon: -78.7868 });

    // "Miami Dolphins" is registered (short form), so it maps too.
    let miami = markers.iter().find(|m| m.label == "Miami Dolphins").unwrap();
    assert_eq!(miami.count, 1);
    assert_eq!(miami.coord, Coord { lat: 25.958, lon: -80.2389 });
}

#[test]
fn missing_file_is_a_hard_error() {
    let err = load_dataset("/definitely/not/here/games.csv");
    assert!(err.is_err());
}

#[test]
fn header_only_file_loads_as_empty_dataset() {
    let p = tmp_file("header_only", "season;location;score\n");
    let (ds, diags) = load_dataset(p.to_str().unwrap()).unwrap();
    assert!(ds.is_empty());
    assert!(diags.is_empty());
}

#[test]
fn comma_file_is_sniffed_from_header() {
    let p = tmp_file("comma", "season,location,games\n2024,New York Jets,3\n");
    let (ds, _) = load_dataset(p.to_str().unwrap()).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.records()[0].location, "New York Jets");
}
