// src/cli.rs
use std::{env, io, io::Write};

use crate::config::consts::ALL_SEASONS;
use crate::config::options::{AppOptions, ExportFormat, MetricKind};
use crate::file::write_export;
use crate::load::load_dataset;
use crate::view;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Action {
    Table,
    ListSeasons,
    Markers,
    Export,
}

pub struct Params {
    pub options: AppOptions,
    pub season: String,
    action: Action,
}

impl Params {
    fn new() -> Self {
        Self {
            options: AppOptions::default(),
            season: s!(ALL_SEASONS),
            action: Action::Table,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let (ds, diags) = load_dataset(&params.options.load.source)?;
    logf!("Load: {} record(s) from {}", ds.len(), params.options.load.source);
    for d in &diags {
        logd!("Parse: {}", d);
    }

    let visible = view::visible_records(&ds, &params.season);
    let export = &params.options.export;

    match params.action {
        Action::ListSeasons => {
            let mut out = io::stdout().lock();
            for season in view::distinct_sorted_seasons(&ds) {
                writeln!(out, "{}", season)?;
            }
        }
        Action::Markers => {
            // Marker counts are season-agnostic; always over the full dataset.
            let mut out = io::stdout().lock();
            for m in view::marker_data(&ds) {
                writeln!(out, "{},{},{},{}", m.coord.lat, m.coord.lon, m.count, m.label)?;
            }
        }
        Action::Export => {
            let path = write_export(export, &visible)?;
            println!("Wrote {}", path.display());
        }
        Action::Table => {
            view::write_table(
                io::stdout().lock(),
                &visible,
                export.metric,
                export.delim(),
                export.include_headers,
            )?;
        }
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--data" => {
                params.options.load.source = args.next().ok_or("Missing value for --data")?;
            }
            "--season" => {
                params.season = args.next().ok_or("Missing value for --season")?;
            }
            "--list-seasons" => params.action = Action::ListSeasons,
            "--markers" => params.action = Action::Markers,
            "--metric" => {
                let v = args.next().ok_or("Missing value for --metric")?;
                params.options.export.metric = match v.to_ascii_lowercase().as_str() {
                    "score" => MetricKind::Score,
                    "games" => MetricKind::Games,
                    other => return Err(format!("Unknown metric: {}", other).into()),
                };}
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.options.export.set_path(&v);
                params.action = Action::Export;
            }
            "--include-headers" => params.options.export.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
