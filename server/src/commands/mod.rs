pub mod serve;
pub mod simulate;
pub mod watch;

use clap::Args;
use simulation::config::{DEFAULT_DRIFT_RATE, DEFAULT_STEADY_THRESHOLD};
use simulation::SimConfig;

/// Simulation tuning shared by `serve` and `simulate`
#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// RNG seed for a reproducible run (random when omitted)
    #[arg(long, env = "POPULATION_SEED")]
    pub seed: Option<u64>,

    /// Drift envelope as a fraction of population per tick
    #[arg(long, default_value_t = DEFAULT_DRIFT_RATE)]
    pub drift_rate: f64,

    /// Relative change at or below which a country is steady
    #[arg(long, default_value_t = DEFAULT_STEADY_THRESHOLD)]
    pub steady_threshold: f64,
}

impl SimArgs {
    pub fn to_config(&self) -> SimConfig {
        let config = SimConfig::default()
            .with_drift_rate(self.drift_rate)
            .with_steady_threshold(self.steady_threshold);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
