// tests/views.rs
//
// Season filter + display + marker view behavior over a hand-built dataset.

use gridmap::data::{Dataset, Record};
use gridmap::geo::Coord;
use gridmap::view;

fn rec(season: &str, location: &str, metric: &str) -> Record {
    Record {
        season: season.into(),
        location: location.into(),
        metric: metric.into(),
    }
}

fn sample() -> Dataset {
    Dataset::new(vec![
        rec("2022", "Buffalo Bills", "24"),
        rec("2023", "Buffalo Bills", "31"),
        rec("2023", "Midfield Mausoleum", "17"),
        rec("2023", "Buffalo Bills", "20"),
        rec("", "Buffalo Bills", "3"),
    ])
}

#[test]
fn seasons_are_distinct_sorted_without_blank() {
    let ds = sample();
    assert_eq!(view::distinct_sorted_seasons(&ds), vec!["2022", "2023"]);
}

#[test]
fn all_sentinel_returns_full_dataset_in_order() {
    let ds = sample();
    let v = view::visible_records(&ds, "all");
    assert_eq!(v, ds);
}

#[test]
fn season_filter_keeps_relative_order() {
    let ds = sample();
    let v = view::visible_records(&ds, "2023");
    assert_eq!(v.len(), 3);
    let metrics: Vec<&str> = v.records().iter().map(|r| r.metric.as_str()).collect();
    assert_eq!(metrics, vec!["31", "17", "20"]);
}

#[test]
fn display_cell_falls_back_uniformly() {
    assert_eq!(view::display_cell(""), "(Unknown)");
    assert_eq!(view::display_cell("2023"), "2023");
}

#[test]
fn marker_data_counts_and_skips_unresolved() {
    let ds = sample();
    let markers = view::marker_data(&ds);

    // "Midfield Mausoleum" is not in the coordinate index → no marker.
    assert_eq!(markers.len(), 1);
    let m = &markers[0];
    assert_eq!(m.label, "Buffalo Bills");
    assert_eq!(m.count, 4); // all seasons merged, blank season included
    assert_eq!(m.coord, Coord { lat: 42.7738, lon: -78.7868 });
}

#[test]
fn marker_data_is_in_first_appearance_order() {
    let ds = Dataset::new(vec![
        rec("2023", "New York Jets", "1"),
        rec("2023", "Buffalo Bills", "2"),
        rec("2023", "New York Jets", "3"),
    ]);
    let markers = view::marker_data(&ds);
    let labels: Vec<&str> = markers.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, vec!["New York Jets", "Buffalo Bills"]);
    assert_eq!(markers[0].count, 2);
}

#[test]
fn empty_locations_never_become_markers() {
    let ds = Dataset::new(vec![rec("2023", "", "7"), rec("2023", "", "3")]);
    assert!(view::marker_data(&ds).is_empty());
}

#[test]
fn write_table_applies_unknown_fallback() {
    let ds = Dataset::new(vec![rec("2023", "", "17"), rec("", "Miami Dolphins", "")]);
    let mut buf: Vec<u8> = Vec::new();
    view::write_table(
        &mut buf,
        &ds,
        gridmap::config::options::MetricKind::Games,
        ';',
        true,
    )
    .unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text,
        "Season;Location;Games\n2023;(Unknown);17\n(Unknown);Miami Dolphins;(Unknown)\n"
    );
}
