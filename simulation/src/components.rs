//! Country records tracked by the simulation
//!
//! A record pairs a country's static identity with its drifting population.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code, e.g. `USA`
    pub code: String,
    /// ISO 3166-1 alpha-2 code, e.g. `US`
    pub iso2: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Country {
    pub fn new(code: &str, iso2: &str, name: &str, lat: f64, lng: f64) -> Self {
        Self {
            code: code.to_string(),
            iso2: iso2.to_string(),
            name: name.to_string(),
            lat,
            lng,
        }
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

// ============================================================================
// Trend
// ============================================================================

/// Direction of the last population change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Steady,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Steady];

    /// Display color for maps and markers
    pub fn color(self) -> &'static str {
        match self {
            Trend::Up => "#2e7d32",
            Trend::Down => "#c62828",
            Trend::Steady => "#ffb300",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Steady => "■",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Steady => "steady",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Mutable per-country simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: Country,
    pub population: u64,
    pub previous_population: u64,
    pub trend: Trend,
    /// Percent change of the last tick, unrounded
    pub change_percent: f64,
}

impl CountryRecord {
    /// Fresh record at its seed population
    pub fn new(country: Country, population: u64) -> Self {
        Self {
            country,
            population,
            previous_population: population,
            trend: Trend::Steady,
            change_percent: 0.0,
        }
    }

    pub fn code(&self) -> &str {
        &self.country.code
    }
}
