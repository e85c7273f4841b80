use serde::{Deserialize, Serialize};
use tracing::warn;

/// Country whose city stands in for any code missing from the table.
pub const FALLBACK_COUNTRY: &str = "GB";

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One row of the country table: the representative city for a country code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryEntry {
    pub code: &'static str,
    pub city: &'static str,
    pub coords: Coordinates,
}

const fn entry(code: &'static str, city: &'static str, lat: f64, lon: f64) -> CountryEntry {
    CountryEntry { code, city, coords: Coordinates { lat, lon } }
}

const FALLBACK_ENTRY: CountryEntry = entry(FALLBACK_COUNTRY, "London", 51.5074, -0.1278);

static COUNTRIES: [CountryEntry; 18] = [
    FALLBACK_ENTRY,
    entry("FR", "Paris", 48.8566, 2.3522),
    entry("DE", "Berlin", 52.5200, 13.4050),
    entry("ES", "Madrid", 40.4168, -3.7038),
    entry("IT", "Rome", 41.9028, 12.4964),
    entry("NL", "Amsterdam", 52.3676, 4.9041),
    entry("BE", "Brussels", 50.8503, 4.3517),
    entry("SE", "Stockholm", 59.3293, 18.0686),
    entry("NO", "Oslo", 59.9139, 10.7522),
    entry("FI", "Helsinki", 60.1699, 24.9384),
    entry("PL", "Warsaw", 52.2297, 21.0122),
    entry("IE", "Dublin", 53.3498, -6.2603),
    entry("PT", "Lisbon", 38.7223, -9.1393),
    entry("AT", "Vienna", 48.2082, 16.3738),
    entry("CH", "Bern", 46.9481, 7.4474),
    entry("DK", "Copenhagen", 55.6761, 12.5683),
    entry("CZ", "Prague", 50.0755, 14.4378),
    entry("GR", "Athens", 37.9838, 23.7275),
];

/// All known countries, in table order.
pub fn countries() -> &'static [CountryEntry] {
    &COUNTRIES
}

/// Exact, case-sensitive lookup of a country code.
pub fn lookup(code: &str) -> Option<&'static CountryEntry> {
    COUNTRIES.iter().find(|e| e.code == code)
}

/// Coordinates for `code`, or those of [`FALLBACK_COUNTRY`] when the code is unknown.
pub fn resolve(code: &str) -> Coordinates {
    match lookup(code) {
        Some(e) => e.coords,
        None => {
            warn!(country = code, fallback = FALLBACK_COUNTRY, "Unknown country code, using fallback city");
            FALLBACK_ENTRY.coords
        }
    }
}
