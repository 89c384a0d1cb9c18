// src/config/consts.rs

// Data source
pub const DEFAULT_DATA_FILE: &str = "home_away_summary.csv";

// View
pub const ALL_SEASONS: &str = "all";
pub const UNKNOWN_LABEL: &str = "(Unknown)";

// Map extent: continental US, equirectangular projection
pub const MAP_LAT_MIN: f64 = 24.0;
pub const MAP_LAT_MAX: f64 = 50.0;
pub const MAP_LON_MIN: f64 = -125.0;
pub const MAP_LON_MAX: f64 = -66.0;

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "games";
