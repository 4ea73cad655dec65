//! Drift System
//!
//! Random-walk step for country populations. Each tick moves a population by
//! a uniform amount inside its drift envelope and reclassifies its trend.

use rand::Rng;
use crate::components::{CountryRecord, Trend};
use crate::config::SimConfig;

/// Draw a perturbation in `[-drift, +drift]` where `drift = population * drift_rate`
pub fn sample_delta<R: Rng + ?Sized>(population: u64, config: &SimConfig, rng: &mut R) -> f64 {
    let drift = population as f64 * config.drift_rate;
    let unit: f64 = rng.gen_range(-1.0..=1.0);
    unit * drift
}

/// Apply a known perturbation to a record.
///
/// Percent change is taken from the unrounded change; only the stored
/// population is rounded.
pub fn apply_delta(record: &CountryRecord, delta: f64, config: &SimConfig) -> CountryRecord {
    let population = record.population as f64;
    let next_population = (population + delta).max(0.0);
    let change = next_population - population;

    // Zero population divides by 1 so the ratio stays finite
    let divisor = if record.population == 0 { 1.0 } else { population };
    let trend = if change.abs() / divisor > config.steady_threshold {
        if change > 0.0 { Trend::Up } else { Trend::Down }
    } else {
        Trend::Steady
    };

    let change_percent = if record.population == 0 {
        0.0
    } else {
        change / population * 100.0
    };

    CountryRecord {
        country: record.country.clone(),
        population: next_population.round() as u64,
        previous_population: record.population,
        trend,
        change_percent,
    }
}

/// Advance one record by one tick
pub fn advance<R: Rng + ?Sized>(record: &CountryRecord, config: &SimConfig, rng: &mut R) -> CountryRecord {
    let delta = sample_delta(record.population, config, rng);
    apply_delta(record, delta, config)
}

/// Advance every record in place
pub fn drift_system<R: Rng + ?Sized>(records: &mut [CountryRecord], config: &SimConfig, rng: &mut R) {
    for record in records.iter_mut() {
        *record = advance(record, config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Country;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(population: u64) -> CountryRecord {
        CountryRecord::new(Country::new("TST", "TS", "Testland", 0.0, 0.0), population)
    }

    #[test]
    fn test_delta_within_envelope() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let delta = sample_delta(1_000_000, &config, &mut rng);
            assert!(delta.abs() <= 500.0, "delta {} escaped the envelope", delta);
        }
    }

    #[test]
    fn test_large_rise_is_up() {
        let config = SimConfig::default();
        let next = apply_delta(&record(1_000_000), 500.0, &config);
        assert_eq!(next.population, 1_000_500);
        assert_eq!(next.previous_population, 1_000_000);
        assert_eq!(next.trend, Trend::Up);
        assert!((next.change_percent - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_large_fall_is_down() {
        let config = SimConfig::default();
        let next = apply_delta(&record(1_000_000), -300.0, &config);
        assert_eq!(next.population, 999_700);
        assert_eq!(next.trend, Trend::Down);
        assert!((next.change_percent + 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_small_change_is_steady() {
        let config = SimConfig::default();
        // 200 / 1_000_000 is exactly the threshold, which stays steady
        let at_threshold = apply_delta(&record(1_000_000), 200.0, &config);
        assert_eq!(at_threshold.trend, Trend::Steady);

        let below = apply_delta(&record(1_000_000), -150.0, &config);
        assert_eq!(below.trend, Trend::Steady);
        assert_eq!(below.population, 999_850);
    }

    #[test]
    fn test_percent_uses_unrounded_change() {
        let config = SimConfig::default();
        let next = apply_delta(&record(1_000_000), 200.6, &config);
        assert_eq!(next.population, 1_000_201);
        assert!((next.change_percent - 0.02006).abs() < 1e-9);
        assert_eq!(next.trend, Trend::Up);
    }

    #[test]
    fn test_population_floors_at_zero() {
        let config = SimConfig::default().with_drift_rate(5.0);
        let next = apply_delta(&record(100), -10_000.0, &config);
        assert_eq!(next.population, 0);
        assert_eq!(next.trend, Trend::Down);
        assert!((next.change_percent + 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_population_stays_put() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let next = advance(&record(0), &config, &mut rng);
        assert_eq!(next.population, 0);
        assert_eq!(next.previous_population, 0);
        assert_eq!(next.change_percent, 0.0);
        assert_eq!(next.trend, Trend::Steady);
    }

    #[test]
    fn test_advance_keeps_identity() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let before = record(1_000_000);
        let after = advance(&before, &config, &mut rng);
        assert_eq!(after.country, before.country);
        assert_eq!(after.previous_population, before.population);
        assert!(after.population >= 999_500 && after.population <= 1_000_500);
    }

    #[test]
    fn test_drift_system_advances_all() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut records = vec![record(1_000), record(2_000_000), record(0)];
        let before: Vec<u64> = records.iter().map(|r| r.population).collect();

        drift_system(&mut records, &config, &mut rng);

        for (r, prev) in records.iter().zip(before) {
            assert_eq!(r.previous_population, prev);
        }
    }
}
