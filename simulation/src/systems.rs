//! Systems - process records each tick

pub mod drift;

pub use drift::{advance, apply_delta, drift_system, sample_delta};
