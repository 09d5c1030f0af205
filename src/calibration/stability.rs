//! Max-Step Search: Largest Stable Single Euler Step
//!
//! Dilating search over step sizes for a tuned attractor:
//!
//!   dt₀ = start,  dtₖ₊₁ = growth · dtₖ
//!
//! Each trial re-initializes the oscillator, disables oversampling and
//! runs a fixed simulated duration at dtₖ. A trial fails as soon as a
//! voltage is non-finite or exceeds AMPLITUDE + tolerance. The search
//! stops at the first failure or when dt reaches the ceiling; the last
//! passing dt is the recommended `max_dt`.
//!
//! Nothing here is analytic: stability is whatever survives the trial.

use tracing::{debug, info};

use crate::error::ChaosError;
use crate::oscillator::ChaoticOscillator;
use crate::remap::AMPLITUDE;

use super::bounds::{check_limits, Axis};
use super::range::SAMPLE_RATE;

/// Settings for the max-step search
#[derive(Debug, Clone)]
pub struct StabilityConfig {
    /// First step size tried
    pub start_dt: f64,
    /// Multiplier between successive trials
    pub growth: f64,
    /// Step size at which the search gives up looking further
    pub ceiling: f64,
    /// Simulated seconds per trial
    pub trial_seconds: f64,
    /// Allowed voltage overshoot beyond AMPLITUDE
    pub tolerance: f64,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            start_dt: 1.0 / SAMPLE_RATE,
            growth: 1.05,
            ceiling: 1.0,
            trial_seconds: 600.0,
            tolerance: 0.05,
        }
    }
}

impl StabilityConfig {
    fn validate(&self) -> Result<(), ChaosError> {
        if !(self.start_dt > 0.0 && self.start_dt.is_finite()) {
            return Err(ChaosError::InvalidConfig("start dt must be positive"));
        }
        if !(self.growth > 1.0 && self.growth.is_finite()) {
            return Err(ChaosError::InvalidConfig("growth factor must exceed 1"));
        }
        if !self.ceiling.is_finite() {
            return Err(ChaosError::InvalidConfig("ceiling must be finite"));
        }
        if !(self.trial_seconds > 0.0 && self.trial_seconds.is_finite()) {
            return Err(ChaosError::InvalidConfig("trial duration must be positive"));
        }
        if !(self.tolerance >= 0.0) {
            return Err(ChaosError::InvalidConfig("tolerance must be non-negative"));
        }
        Ok(())
    }

    /// Voltage magnitude a trial may not exceed
    pub fn bound(&self) -> f64 {
        AMPLITUDE + self.tolerance
    }
}

/// First sample that failed a stability trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityFailure {
    /// Step size of the failing trial
    pub dt: f64,
    pub axis: Axis,
    /// Offending voltage
    pub value: f64,
    /// Index of the failing update within the trial
    pub sample: u64,
}

/// Outcome of a max-step search
#[derive(Debug, Clone)]
pub struct StabilityReport {
    /// Largest step that passed, if any did
    pub max_dt: Option<f64>,
    /// Number of trials run
    pub trials: usize,
    /// The failure that ended the search; None if the ceiling was reached
    pub failure: Option<StabilityFailure>,
}

/// Search for the largest stable step size of a tuned oscillator.
///
/// The oscillator is left re-initialized with its previous ceiling.
pub fn search_max_dt(osc: &mut ChaoticOscillator, config: &StabilityConfig) -> Result<StabilityReport, ChaosError> {
    config.validate()?;
    if !osc.is_tuned() {
        return Err(ChaosError::Untuned(osc.name()));
    }

    let saved = osc.max_dt();
    osc.set_max_dt(None);

    info!(
        attractor = osc.name(),
        start = config.start_dt,
        growth = config.growth,
        trial_seconds = config.trial_seconds,
        "max-step search started"
    );

    let mut report = StabilityReport {
        max_dt: None,
        trials: 0,
        failure: None,
    };

    let mut dt = config.start_dt;
    while dt < config.ceiling {
        report.trials += 1;
        match run_trial(osc, dt, config) {
            Ok(()) => {
                debug!(attractor = osc.name(), dt, "trial passed");
                report.max_dt = Some(dt);
            }
            Err(failure) => {
                debug!(attractor = osc.name(), dt, axis = %failure.axis, value = failure.value, "trial failed");
                report.failure = Some(failure);
                break;
            }
        }
        dt *= config.growth;
    }

    osc.set_max_dt(saved);
    osc.initialize();

    info!(attractor = osc.name(), max_dt = ?report.max_dt, trials = report.trials, "max-step search finished");
    Ok(report)
}

fn run_trial(osc: &mut ChaoticOscillator, dt: f64, config: &StabilityConfig) -> Result<(), StabilityFailure> {
    osc.initialize();

    let steps = (config.trial_seconds / dt).ceil() as u64;
    let bound = config.bound();
    for sample in 0..steps {
        osc.update(dt);
        check_limits(osc.voltage(), bound).map_err(|oob| StabilityFailure {
            dt,
            axis: oob.axis,
            value: oob.value,
            sample,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attractors::{Bouali, Rucklidge};

    #[test]
    fn test_rejects_untuned() {
        let mut osc = ChaoticOscillator::new(Bouali::new());
        match search_max_dt(&mut osc, &StabilityConfig::default()) {
            Err(ChaosError::Untuned(name)) => assert_eq!(name, "Bouali"),
            other => panic!("Expected Untuned, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_growth() {
        let mut osc = ChaoticOscillator::new(Rucklidge::new());
        let config = StabilityConfig { growth: 1.0, ..StabilityConfig::default() };
        assert!(matches!(search_max_dt(&mut osc, &config), Err(ChaosError::InvalidConfig(_))));
    }

    #[test]
    fn test_start_above_ceiling_runs_nothing() {
        let mut osc = ChaoticOscillator::new(Rucklidge::new());
        let config = StabilityConfig { start_dt: 2.0, ..StabilityConfig::default() };
        let report = search_max_dt(&mut osc, &config).unwrap();
        assert_eq!(report.trials, 0);
        assert!(report.max_dt.is_none());
        assert!(report.failure.is_none());
    }

    #[test]
    fn test_rucklidge_search() {
        let mut osc = ChaoticOscillator::new(Rucklidge::new());
        let config = StabilityConfig {
            start_dt: 0.001,
            trial_seconds: 10.0,
            tolerance: 0.1,
            ..StabilityConfig::default()
        };

        let report = search_max_dt(&mut osc, &config).unwrap();
        let max_dt = report.max_dt.expect("starting step should be stable");
        assert!(max_dt > 0.001 && max_dt < 1.0, "max_dt = {}", max_dt);

        let failure = report.failure.expect("search should stop on a failure");
        assert!((failure.dt - max_dt * config.growth).abs() < 1e-12);
        assert!(!failure.value.is_finite() || failure.value.abs() > config.bound());

        // Oscillator is restored
        assert_eq!(osc.max_dt(), Some(0.002));
        assert_eq!(osc.time(), 0.0);
    }
}
