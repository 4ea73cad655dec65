//! Simulation World - owns the records and the random source

use std::collections::HashSet;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::components::{CountryRecord, Trend};
use crate::config::SimConfig;
use crate::countries::{base_countries, CountrySeed};
use crate::error::{SimError, SimResult};
use crate::snapshot::{self, Snapshot};
use crate::systems;

/// Summary of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickResult {
    pub tick: u64,
    pub up: u32,
    pub down: u32,
    pub steady: u32,
    pub total_population: u64,
}

pub struct SimulationWorld<R = StdRng> {
    records: Vec<CountryRecord>,
    rng: R,
    config: SimConfig,
    tick: u64,
}

impl SimulationWorld<StdRng> {
    /// Seed dataset with default config and an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            records: base_countries().into_iter().map(CountrySeed::into_record).collect(),
            rng: StdRng::from_entropy(),
            config: SimConfig::default(),
            tick: 0,
        }
    }

    /// Seed dataset, RNG seeded from `config.seed` when present
    pub fn from_config(config: SimConfig) -> SimResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for SimulationWorld<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SimulationWorld<R> {
    /// Seed dataset with a caller-supplied random source
    pub fn with_rng(config: SimConfig, rng: R) -> SimResult<Self> {
        Self::with_countries(config, rng, base_countries())
    }

    pub fn with_countries(config: SimConfig, rng: R, seeds: Vec<CountrySeed>) -> SimResult<Self> {
        config.validate()?;
        if seeds.is_empty() {
            return Err(SimError::EmptyWorld);
        }

        let mut seen = HashSet::new();
        for seed in &seeds {
            let country = &seed.country;
            if !seen.insert(country.code.clone()) {
                return Err(SimError::DuplicateCountry(country.code.clone()));
            }
            if !country.has_valid_coordinates() {
                return Err(SimError::InvalidCoordinates {
                    code: country.code.clone(),
                    lat: country.lat,
                    lng: country.lng,
                });
            }
        }

        Ok(Self {
            records: seeds.into_iter().map(CountrySeed::into_record).collect(),
            rng,
            config,
            tick: 0,
        })
    }

    /// Advance every record by one step
    pub fn tick(&mut self) -> TickResult {
        systems::drift_system(&mut self.records, &self.config, &mut self.rng);
        self.tick += 1;

        let mut result = TickResult {
            tick: self.tick,
            up: 0,
            down: 0,
            steady: 0,
            total_population: 0,
        };
        for record in &self.records {
            match record.trend {
                Trend::Up => result.up += 1,
                Trend::Down => result.down += 1,
                Trend::Steady => result.steady += 1,
            }
            result.total_population = result.total_population.saturating_add(record.population);
        }

        debug!(
            tick = result.tick,
            up = result.up,
            down = result.down,
            steady = result.steady,
            total = result.total_population,
            "population tick"
        );
        result
    }

    /// Advance, then project. There is no read-only variant.
    pub fn snapshot(&mut self) -> Snapshot {
        self.tick();
        snapshot::project(&self.records, Utc::now())
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn record(&self, code: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.code() == code)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn total_population(&self) -> u64 {
        self.records.iter().map(|r| r.population).fold(0u64, u64::saturating_add)
    }
}
