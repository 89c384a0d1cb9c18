// src/load.rs

use std::{error::Error, fs};

use crate::csv::{Diagnostic, parse_dataset};
use crate::data::Dataset;
use crate::net;

/// Load the dataset from a filesystem path or an http:// URL.
/// Happens once per session; the result is held in memory and only ever
/// read from after that.
///
/// Transport failure (file unreadable, host unreachable, non-200) is the
/// one hard error here. Once the text is in hand, nothing else fails:
/// malformed content degrades inside the parser.
pub fn load_dataset(source: &str) -> Result<(Dataset, Vec<Diagnostic>), Box<dyn Error>> {
    let text = if source.starts_with("http://") {
        net::http_get(source)?
    } else {
        fs::read_to_string(source)?
    };
    Ok(parse_dataset(&text))
}
