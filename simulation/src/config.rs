//! Tuning knobs for a simulation run

use crate::error::{SimError, SimResult};

/// Fraction of the current population that bounds one tick's change.
pub const DEFAULT_DRIFT_RATE: f64 = 0.0005;

/// Relative change at or below which a country counts as steady.
pub const DEFAULT_STEADY_THRESHOLD: f64 = 0.0002;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// RNG seed for a deterministic run. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Drift envelope as a fraction of population.
    pub drift_rate: f64,
    /// Relative change threshold separating steady from up/down.
    pub steady_threshold: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            drift_rate: DEFAULT_DRIFT_RATE,
            steady_threshold: DEFAULT_STEADY_THRESHOLD,
        }
    }
}

impl SimConfig {
    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_drift_rate(mut self, rate: f64) -> Self {
        self.drift_rate = rate;
        self
    }

    pub fn with_steady_threshold(mut self, threshold: f64) -> Self {
        self.steady_threshold = threshold;
        self
    }

    pub fn validate(&self) -> SimResult<()> {
        // A tick may not more than double or wipe out a population
        if !self.drift_rate.is_finite() || !(0.0..1.0).contains(&self.drift_rate) {
            return Err(SimError::InvalidConfig(format!(
                "drift_rate must be in [0, 1), got {}",
                self.drift_rate
            )));
        }
        if !self.steady_threshold.is_finite() || self.steady_threshold < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "steady_threshold must be a non-negative number, got {}",
                self.steady_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.seed, None);
        assert!((config.drift_rate - 0.0005).abs() < f64::EPSILON);
        assert!((config.steady_threshold - 0.0002).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default()
            .with_seed(7)
            .with_drift_rate(0.01)
            .with_steady_threshold(0.001);
        assert_eq!(config.seed, Some(7));
        assert!((config.drift_rate - 0.01).abs() < f64::EPSILON);
        assert!((config.steady_threshold - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn config_rejects_bad_values() {
        let negative = SimConfig::default().with_drift_rate(-0.1);
        assert!(matches!(negative.validate(), Err(SimError::InvalidConfig(_))));

        let nan = SimConfig::default().with_steady_threshold(f64::NAN);
        assert!(matches!(nan.validate(), Err(SimError::InvalidConfig(_))));

        let infinite = SimConfig::default().with_drift_rate(f64::INFINITY);
        assert!(infinite.validate().is_err());

        let huge = SimConfig::default().with_drift_rate(1e300);
        assert!(matches!(huge.validate(), Err(SimError::InvalidConfig(_))));

        let one = SimConfig::default().with_drift_rate(1.0);
        assert!(one.validate().is_err());
        assert!(SimConfig::default().with_drift_rate(0.999).validate().is_ok());
    }
}
