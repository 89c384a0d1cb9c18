// src/geo.rs
//
// Static venue reference data and the location → coordinate resolver.

/// Latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

const fn c(lat: f64, lon: f64) -> Coord {
    Coord { lat, lon }
}

/// Compiled-in venue table. Each team is registered twice: the long form
/// as it appears in the dataset (team + venue detail) and the bare team
/// name, both pointing at the same coordinate, to widen match coverage.
///
/// Order matters: the substring fallback in `resolve` returns the first
/// entry whose label is contained in the query, so an ambiguous label
/// goes to the earlier entry.
pub static COORD_INDEX: &[(&str, Coord)] = &[
    ("Buffalo Bills (Highmark Stadium - Orchard Park, NY)", c(42.7738, -78.7868)),
    ("Buffalo Bills", c(42.7738, -78.7868)),
    ("Miami Dolphins (Miami Gardens, FL)", c(25.958, -80.2389)),
    ("Miami Dolphins", c(25.958, -80.2389)),
    ("New England Patriots (Foxborough, MA)", c(42.0909, -71.2643)),
    ("New England Patriots", c(42.0909, -71.2643)),
    ("New York Jets (East Rutherford, NJ)", c(40.8136, -74.0744)),
    ("New York Jets", c(40.8136, -74.0744)),
    ("Baltimore Ravens (Baltimore, MD)", c(39.278, -76.6227)),
    ("Baltimore Ravens", c(39.278, -76.6227)),
];

/// Resolve a free-form location label to a coordinate.
///
/// Exact key match first, then the first registered key that is a
/// substring of the label. Total: any input (including empty) yields
/// either a coordinate or None.
pub fn resolve(label: &str) -> Option<Coord> {
    if label.is_empty() {
        return None;
    }

    if let Some((_, coord)) = COORD_INDEX.iter().find(|(key, _)| *key == label) {
        return Some(*coord);
    }

    COORD_INDEX
        .iter()
        .find(|(key, _)| label.contains(key))
        .map(|(_, coord)| *coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_is_not_found() {
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn unknown_label_is_not_found() {
        assert_eq!(resolve("Lunar Stadium (Sea of Tranquility)"), None);
    }

    #[test]
    fn long_and_short_forms_resolve_to_the_same_coordinate() {
        let long = resolve("Buffalo Bills (Highmark Stadium - Orchard Park, NY)").unwrap();
        let short = resolve("Buffalo Bills").unwrap();
        assert_eq!(long, short);
        assert_eq!(long, Coord { lat: 42.7738, lon: -78.7868 });
    }

    #[test]
    fn substring_fallback_matches_decorated_labels() {
        let got = resolve("Week 3: Miami Dolphins (road game)").unwrap();
        assert_eq!(got, Coord { lat: 25.958, lon: -80.2389 });
    }

    #[test]
    fn ambiguous_label_goes_to_the_earlier_entry() {
        // Contains two registered team names; registration order decides.
        let got = resolve("New York Jets at Buffalo Bills").unwrap();
        assert_eq!(got, Coord { lat: 42.7738, lon: -78.7868 });
    }
}
