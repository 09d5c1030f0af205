//! Range Discovery: Empirical Output Range of an Attractor
//!
//! 1. **Settle**: run long enough for transients from the initial
//!    condition to decay, discarding output.
//! 2. **Measure**: keep running and track the running min/max of every
//!    raw coordinate.
//!
//! Both phases check the raw state after every update and stop at the
//! first non-finite or out-of-bound coordinate.

use std::fmt;

use tracing::{info, warn};

use crate::attractors::{AttractorState, AxisRange, CalibrationRange};
use crate::error::ChaosError;
use crate::oscillator::ChaoticOscillator;

use super::bounds::{check_limits, RANGE_LIMIT};

/// Reference sample rate (Hz)
pub const SAMPLE_RATE: f64 = 44100.0;

/// Which part of a calibration run was executing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Settle,
    Measure,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Settle => "settle",
            Phase::Measure => "measure",
        })
    }
}

/// Settings for range discovery
#[derive(Debug, Clone)]
pub struct RangeConfig {
    /// Updates per simulated second; dt = 1 / sample_rate
    pub sample_rate: f64,
    /// Simulated seconds discarded before measuring
    pub settle_seconds: f64,
    /// Simulated seconds of measurement
    pub measure_seconds: f64,
    /// Absolute bound on every raw coordinate
    pub limit: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            settle_seconds: 60.0,
            measure_seconds: 4.0 * 3600.0,
            limit: RANGE_LIMIT,
        }
    }
}

impl RangeConfig {
    fn validate(&self) -> Result<(), ChaosError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ChaosError::InvalidConfig("sample rate must be positive"));
        }
        if !(self.settle_seconds >= 0.0) || !(self.measure_seconds >= 0.0) {
            return Err(ChaosError::InvalidConfig("durations must be non-negative"));
        }
        if !(self.limit > 0.0) {
            return Err(ChaosError::InvalidConfig("limit must be positive"));
        }
        if self.measure_samples() == 0 {
            return Err(ChaosError::InvalidConfig("measurement needs at least one sample"));
        }
        Ok(())
    }

    pub fn dt(&self) -> f64 {
        1.0 / self.sample_rate
    }

    pub fn settle_samples(&self) -> u64 {
        (self.settle_seconds * self.sample_rate).round() as u64
    }

    pub fn measure_samples(&self) -> u64 {
        (self.measure_seconds * self.sample_rate).round() as u64
    }
}

/// Result of a successful range discovery
#[derive(Debug, Clone)]
pub struct RangeReport {
    /// State after the settle phase
    pub settled: AttractorState,
    /// State after the measurement phase
    pub finished: AttractorState,
    /// Measured raw range per axis
    pub range: CalibrationRange,
    /// Number of measured samples
    pub samples: u64,
}

/// Discover the raw output range of `osc`.
///
/// The oscillator is used as passed, so callers may perturb it first.
pub fn discover_range(osc: &mut ChaoticOscillator, config: &RangeConfig) -> Result<RangeReport, ChaosError> {
    config.validate()?;

    let dt = config.dt();
    info!(
        attractor = osc.name(),
        dt,
        settle = config.settle_samples(),
        measure = config.measure_samples(),
        "range discovery started"
    );

    for sample in 0..config.settle_samples() {
        osc.update(dt);
        check_sample(osc, config.limit, Phase::Settle, sample)?;
    }

    let settled = osc.state();
    info!(attractor = osc.name(), ?settled, "settled");

    let mut range = CalibrationRange {
        x: AxisRange::empty(),
        y: AxisRange::empty(),
        z: AxisRange::empty(),
    };

    let samples = config.measure_samples();
    for sample in 0..samples {
        osc.update(dt);
        check_sample(osc, config.limit, Phase::Measure, sample)?;

        let s = osc.state();
        range.x.include(s.x);
        range.y.include(s.y);
        range.z.include(s.z);
    }

    let finished = osc.state();
    info!(attractor = osc.name(), ?finished, "range discovery finished");

    Ok(RangeReport {
        settled,
        finished,
        range,
        samples,
    })
}

fn check_sample(osc: &ChaoticOscillator, limit: f64, phase: Phase, sample: u64) -> Result<(), ChaosError> {
    check_limits(osc.state().to_array(), limit).map_err(|oob| {
        warn!(
            attractor = osc.name(),
            %phase,
            axis = %oob.axis,
            value = oob.value,
            sample,
            "state out of bounds"
        );
        ChaosError::Diverged {
            phase,
            axis: oob.axis,
            value: oob.value,
            sample,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attractors::{Attractor, Rucklidge, Sprott};

    fn short(settle_seconds: f64, measure_seconds: f64) -> RangeConfig {
        RangeConfig {
            settle_seconds,
            measure_seconds,
            ..RangeConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = RangeConfig::default();
        assert_eq!(config.settle_samples(), 60 * 44100);
        assert_eq!(config.measure_samples(), 4 * 3600 * 44100);
    }

    #[test]
    fn test_sprott_range_within_calibration() {
        let mut osc = ChaoticOscillator::new(Sprott::new());
        let report = discover_range(&mut osc, &short(0.1, 0.2)).unwrap();

        assert_eq!(report.samples, (0.2f64 * 44100.0).round() as u64);
        assert!(report.range.is_known());

        let known = Sprott::new().calibration();
        for (measured, tuned) in report.range.axes().iter().zip(known.axes()) {
            assert!(measured.min >= tuned.min && measured.max <= tuned.max,
                "measured {:?} outside calibration {:?}", measured, tuned);
        }
        assert_eq!(report.finished, osc.state());
    }

    #[test]
    fn test_oversized_step_diverges() {
        let mut osc = ChaoticOscillator::new(Rucklidge::new()).with_max_dt(None);
        let config = RangeConfig {
            sample_rate: 2.0,
            settle_seconds: 10.0,
            measure_seconds: 10.0,
            ..RangeConfig::default()
        };

        match discover_range(&mut osc, &config) {
            Err(ChaosError::Diverged { phase, axis, value, .. }) => {
                assert_eq!(phase, Phase::Settle);
                assert_eq!(axis, crate::calibration::Axis::X);
                assert!(!value.is_finite() || value.abs() > RANGE_LIMIT);
            }
            other => panic!("Expected divergence, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_measurement() {
        let mut osc = ChaoticOscillator::new(Rucklidge::new());
        let err = discover_range(&mut osc, &short(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ChaosError::InvalidConfig(_)));

        let config = RangeConfig { sample_rate: 0.0, ..RangeConfig::default() };
        assert!(discover_range(&mut osc, &config).is_err());
        assert_eq!(osc.state(), Rucklidge::new().initial_state());
    }
}
