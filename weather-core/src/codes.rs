//! WMO weather interpretation codes.

/// Summary used when a code is not in the table.
pub const UNKNOWN_SUMMARY: &str = "Unknown";

static WEATHER_CODES: [(u16, &str); 24] = [
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Foggy"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Every (code, description) pair in the table.
pub fn all() -> &'static [(u16, &'static str)] {
    &WEATHER_CODES
}

/// Description for `code`, if the table has one.
pub fn describe(code: i64) -> Option<&'static str> {
    WEATHER_CODES
        .iter()
        .find(|(c, _)| i64::from(*c) == code)
        .map(|(_, d)| *d)
}

/// Description for `code`, or [`UNKNOWN_SUMMARY`].
pub fn summary(code: i64) -> &'static str {
    describe(code).unwrap_or(UNKNOWN_SUMMARY)
}
