// src/csv.rs
use std::fmt;
use std::io::{self, Write};

use crate::data::{Dataset, Record};

/* ---------------- Parsing ---------------- */

/// Soft parse anomaly. Returned as a value so callers (and tests) can
/// inspect what the parser skipped or padded without reading a log file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// Line was empty, or all three fields were empty after trimming.
    BlankRow { line: usize },
    /// Line had fewer than three fields; missing positions became "".
    ShortRow { line: usize, fields: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BlankRow { line } => write!(f, "line {line}: blank row skipped"),
            Diagnostic::ShortRow { line, fields } => {
                write!(f, "line {line}: {fields} field(s), padded to 3")
            }
        }
    }
}

/// Pick the field separator from the header line only.
/// Semicolon wins over comma; a header with neither is one big field,
/// so comma is as good a default as any.
pub fn sniff_delimiter(header_line: &str) -> char {
    if header_line.contains(';') { ';' } else { ',' }
}

/// Parse delimited text into a dataset: column 0 = season, 1 = location,
/// 2 = metric. The header row is consulted for delimiter sniffing only.
///
/// Never errors. Missing data degrades to an empty dataset; malformed rows
/// degrade to padded records and are dropped only when all three fields
/// end up empty. No quote handling: a separator inside a field misaligns
/// that row's columns (known limitation of the input format).
pub fn parse_dataset(raw: &str) -> (Dataset, Vec<Diagnostic>) {
    let text = raw.trim();
    let mut records = Vec::new();
    let mut diags = Vec::new();

    let mut lines = text.lines();
    let header = match lines.next() {
        Some(h) => h,
        None => return (Dataset::new(records), diags),
    };
    let sep = sniff_delimiter(header);

    // 1-based line numbers, header = line 1
    for (i, line) in lines.enumerate() {
        let lineno = i + 2;
        let line = line.trim();
        if line.is_empty() {
            diags.push(Diagnostic::BlankRow { line: lineno });
            continue;
        }

        let cols: Vec<&str> = line.split(sep).collect();
        if cols.len() < 3 {
            diags.push(Diagnostic::ShortRow { line: lineno, fields: cols.len() });
        }

        let field = |ix: usize| cols.get(ix).map(|c| c.trim()).unwrap_or("");
        let rec = Record {
            season: s!(field(0)),
            location: s!(field(1)),
            metric: s!(field(2)),
        };

        if rec.is_empty() {
            diags.push(Diagnostic::BlankRow { line: lineno });
            continue;
        }
        records.push(rec);
    }

    (Dataset::new(records), diags)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string (Copy/Export) from headers and rows.
/// Outbound-only: quoting here targets spreadsheets, not re-ingestion.
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
