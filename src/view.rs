// src/view.rs
//
// Derived, ephemeral projections the frontends consume: season selector
// entries, the visible (filtered) table, and map marker data. Nothing
// here mutates the dataset; everything is recomputed on demand.

use std::io::{self, Write};

use crate::config::consts::UNKNOWN_LABEL;
use crate::config::options::MetricKind;
use crate::csv::write_row;
use crate::data::Dataset;
use crate::geo::{self, Coord};

/// One map marker: a resolved location plus its occurrence count.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub coord: Coord,
    pub label: String,
    pub count: usize,
}

/// Entries for the season selector.
pub fn distinct_sorted_seasons(ds: &Dataset) -> Vec<String> {
    ds.seasons()
}

/// Records to show for the current selection ("all" = everything).
pub fn visible_records(ds: &Dataset, selected: &str) -> Dataset {
    ds.filter_by_season(selected)
}

/// Display fallback, applied uniformly to all three table columns.
pub fn display_cell(cell: &str) -> &str {
    if cell.is_empty() { UNKNOWN_LABEL } else { cell }
}

/// Table header row for the configured metric semantics.
pub fn table_headers(metric: MetricKind) -> Vec<String> {
    vec![s!("Season"), s!("Location"), s!(metric.label())]
}

/// Aggregate counts per location, then resolve each distinct location to
/// a coordinate. Locations that fail to resolve contribute no marker.
/// Output order is first-appearance order in the dataset, so marker
/// placement is stable across reloads of the same file.
pub fn marker_data(ds: &Dataset) -> Vec<Marker> {
    let counts = ds.count_by_location();
    let mut out: Vec<Marker> = Vec::new();

    for r in ds.records() {
        if r.location.is_empty() { continue; }
        if out.iter().any(|m| m.label == r.location) { continue; }
        if let Some(coord) = geo::resolve(&r.location) {
            out.push(Marker {
                coord,
                label: r.location.clone(),
                count: counts.get(&r.location).copied().unwrap_or(0),
            });
        }
    }

    out
}

/// Render the visible records as delimited text into an injected sink.
/// This is the CLI's table output path; the GUI draws its own widgets.
pub fn write_table<W: Write>(
    mut w: W,
    ds: &Dataset,
    metric: MetricKind,
    sep: char,
    include_headers: bool,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &table_headers(metric), sep)?;
    }
    for r in ds.records() {
        let row = vec![
            s!(display_cell(&r.season)),
            s!(display_cell(&r.location)),
            s!(display_cell(&r.metric)),
        ];
        write_row(&mut w, &row, sep)?;
    }
    Ok(())
}
