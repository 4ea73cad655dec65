//! Seed dataset
//!
//! The ten most populous tracked countries with their starting populations.

use crate::components::{Country, CountryRecord};

/// (code, iso2, name, lat, lng, population)
const BASE_COUNTRIES: &[(&str, &str, &str, f64, f64, u64)] = &[
    ("USA", "US", "United States", 37.0902, -95.7129, 334_805_000),
    ("CHN", "CN", "China", 35.8617, 104.1954, 1_411_750_000),
    ("IND", "IN", "India", 20.5937, 78.9629, 1_380_004_385),
    ("IDN", "ID", "Indonesia", -0.7893, 113.9213, 276_361_783),
    ("PAK", "PK", "Pakistan", 30.3753, 69.3451, 225_199_937),
    ("BRA", "BR", "Brazil", -14.235, -51.9253, 213_993_437),
    ("NGA", "NG", "Nigeria", 9.082, 8.6753, 206_139_587),
    ("BGD", "BD", "Bangladesh", 23.685, 90.3563, 170_971_781),
    ("RUS", "RU", "Russia", 61.524, 105.3188, 146_074_130),
    ("MEX", "MX", "Mexico", 23.6345, -102.5528, 130_262_216),
];

/// A country and the population it starts with
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySeed {
    pub country: Country,
    pub population: u64,
}

impl CountrySeed {
    pub fn new(country: Country, population: u64) -> Self {
        Self { country, population }
    }

    pub fn into_record(self) -> CountryRecord {
        CountryRecord::new(self.country, self.population)
    }
}

pub fn base_countries() -> Vec<CountrySeed> {
    BASE_COUNTRIES
        .iter()
        .map(|&(code, iso2, name, lat, lng, population)| {
            CountrySeed::new(Country::new(code, iso2, name, lat, lng), population)
        })
        .collect()
}
