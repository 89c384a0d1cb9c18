// src/data.rs
//
// Canonical in-memory dataset.
//
// - Record: one parsed data row (season, location, metric).
// - Dataset: read-only holder for the records of one load. Built once by
//   the parser; everything downstream (season filter, aggregation, view
//   layer) is a derived read-only projection.

use std::collections::HashMap;

use crate::config::consts::ALL_SEASONS;

/// One data row. All three fields are already trimmed; any of them may be
/// empty, but never all three at once (the parser drops those rows).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub season: String,
    pub location: String,
    /// Opaque display value: a score or a game count depending on the
    /// dataset version. Never interpreted numerically.
    pub metric: String,
}

impl Record {
    pub fn is_empty(&self) -> bool {
        self.season.is_empty() && self.location.is_empty() && self.metric.is_empty()
    }
}

/// Ordered record sequence, insertion order = row order in the source.
/// Duplicate rows stay separate entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self { Self { records } }

    /// Read-only view of the records.
    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct non-empty season labels, lexicographically sorted.
    /// Records with an empty season stay reachable through "all".
    pub fn seasons(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if r.season.is_empty() { continue; }
            if !out.contains(&r.season) {
                out.push(r.season.clone());
            }
        }
        out.sort();
        out
    }

    /// Subsequence of records for one season, original order preserved.
    /// The sentinel "all" returns the full dataset unchanged. Comparison
    /// is exact and case-sensitive.
    pub fn filter_by_season(&self, season: &str) -> Dataset {
        if season == ALL_SEASONS {
            return self.clone();
        }
        Dataset::new(
            self.records
                .iter()
                .filter(|r| r.season == season)
                .cloned()
                .collect(),
        )
    }

    /// Tally records per exact location string, all seasons merged.
    /// Records with an empty location are excluded (no "" key).
    pub fn count_by_location(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for r in &self.records {
            if r.location.is_empty() { continue; }
            *counts.entry(r.location.clone()).or_default() += 1;
        }
        counts
    }
}
