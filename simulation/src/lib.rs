//! Population Simulation Engine
//!
//! Random-walk population model for the world population dashboard.
//! Owns a fixed set of country records, drifts them on every tick and
//! projects them into timestamped snapshots for display.

pub mod components;
pub mod config;
pub mod countries;
pub mod error;
pub mod snapshot;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::SimConfig;
pub use countries::{base_countries, CountrySeed};
pub use error::{SimError, SimResult};
pub use snapshot::{CountryView, Snapshot};
pub use world::{SimulationWorld, TickResult};
