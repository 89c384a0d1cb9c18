// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::data::Dataset;
use crate::view::table_headers;

/// Write the given (already filtered) records as one CSV/TSV file based on
/// ExportOptions (path, headers policy, delimiter, metric label).
/// Returns the final path written to.
///
/// Exports carry the raw field values; the "(Unknown)" fallback is a
/// display concern and stays out of files.
pub fn write_export(
    export: &ExportOptions,
    ds: &Dataset,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = Some(table_headers(export.metric));
    let rows: Vec<Vec<String>> = ds
        .records()
        .iter()
        .map(|r| vec![r.season.clone(), r.location.clone(), r.metric.clone()])
        .collect();

    let contents = to_export_string(&headers, &rows, export.include_headers, export.delim());

    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
