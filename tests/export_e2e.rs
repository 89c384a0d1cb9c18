// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use gridmap::config::options::{ExportFormat, ExportOptions, MetricKind};
use gridmap::data::{Dataset, Record};
use gridmap::file::write_export;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("gridmap_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn rec(season: &str, location: &str, metric: &str) -> Record {
    Record {
        season: season.into(),
        location: location.into(),
        metric: metric.into(),
    }
}

#[test]
fn format_controls_the_extension() {
    let mut opts = ExportOptions::default();
    let dir = tmp_dir("ext");
    opts.set_path(dir.join("hello.txt").to_str().unwrap());

    opts.format = ExportFormat::Csv;
    assert!(opts.out_path().to_string_lossy().ends_with("hello.csv"));

    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("hello.tsv"));
}

#[test]
fn csv_export_writes_filtered_rows_with_metric_header() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.include_headers = true;
    opts.metric = MetricKind::Games;

    let dir = tmp_dir("csv");
    opts.set_path(dir.join("games.csv").to_str().unwrap());

    let ds = Dataset::new(vec![
        rec("2023", "Buffalo Bills", "9"),
        rec("2023", "Miami Dolphins (Miami Gardens, FL)", "1"),
    ]);
    let visible = ds.filter_by_season("2023");

    let path = write_export(&opts, &visible).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert!(content.starts_with("Season,Location,Games\n"));
    assert!(content.contains("2023,Buffalo Bills,9\n"));
    // Comma inside the location gets quoted on the way out.
    assert!(content.contains("2023,\"Miami Dolphins (Miami Gardens, FL)\",1\n"));
}

#[test]
fn tsv_export_skips_headers_when_disabled() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;

    let dir = tmp_dir("tsv");
    opts.set_path(dir.join("games").to_str().unwrap());

    let ds = Dataset::new(vec![rec("2022", "New York Jets", "1")]);
    let path = write_export(&opts, &ds).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert_eq!(content, "2022\tNew York Jets\t1\n");
}

#[test]
fn export_creates_missing_directories() {
    let dir = tmp_dir("mkdirs");
    let nested = dir.join("a").join("b");

    let mut opts = ExportOptions::default();
    opts.set_path(nested.join("out.csv").to_str().unwrap());

    let ds = Dataset::new(vec![rec("2023", "Buffalo Bills", "1")]);
    let path = write_export(&opts, &ds).unwrap();
    assert!(path.exists());
}
