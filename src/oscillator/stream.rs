//! Stream: Frame-Driven Stepping with a Divergence Halt
//!
//! Drives an oscillator the way a display loop does: a fixed number of
//! updates per frame, a trail point every plot interval of simulated
//! time, and a bounds check after every update. The first update that
//! leaves the sane region ends the run.
//!
//! The speed setting dilates simulated time:
//!
//!   dt = 10^(3·speed/100) / sample_rate

use tracing::{debug, error};

use crate::calibration::{is_out_of_bounds, DISPLAY_RADIUS, SAMPLE_RATE};
use crate::error::ChaosError;

use super::integrator::ChaoticOscillator;
use super::trail::Trail;

/// Settings for a frame-driven run
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Updates per real second
    pub sample_rate: f64,
    /// Frames per real second
    pub frame_rate: u32,
    /// Time dilation, 0 (real time) to 100 (1000x)
    pub speed: u32,
    /// Simulated seconds between trail points
    pub plot_interval: f64,
    /// Frames to run unless stepping halts first
    pub frames: usize,
    /// Voltage radius that halts the run
    pub radius: f64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            frame_rate: 60,
            speed: 0,
            plot_interval: 0.01,
            frames: 600,
            radius: DISPLAY_RADIUS,
        }
    }
}

impl StreamConfig {
    fn validate(&self) -> Result<(), ChaosError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ChaosError::InvalidConfig("sample rate must be positive"));
        }
        if self.frame_rate == 0 {
            return Err(ChaosError::InvalidConfig("frame rate must be positive"));
        }
        if self.speed > 100 {
            return Err(ChaosError::InvalidConfig("speed must be within 0..=100"));
        }
        if !(self.plot_interval >= 0.0) {
            return Err(ChaosError::InvalidConfig("plot interval must be non-negative"));
        }
        Ok(())
    }

    /// Simulated seconds per update
    pub fn dt(&self) -> f64 {
        10f64.powf(3.0 * self.speed as f64 / 100.0) / self.sample_rate
    }

    pub fn samples_per_frame(&self) -> usize {
        (self.sample_rate / self.frame_rate as f64) as usize
    }
}

/// Where a run left the sane region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halt {
    /// Frame in which stepping stopped, counted from 1
    pub frame: usize,
    /// Simulated time at the offending update
    pub time: f64,
    pub voltage: [f64; 3],
}

/// Outcome of a frame-driven run
#[derive(Debug, Clone)]
pub struct StreamReport {
    /// Frames started, including a halted one
    pub frames: usize,
    /// Set when stepping halted on divergence
    pub halt: Option<Halt>,
}

impl StreamReport {
    pub fn diverged(&self) -> bool {
        self.halt.is_some()
    }
}

/// Step `osc` frame by frame, recording voltage points into `trail`.
///
/// The current voltage is recorded before the first update. Divergence
/// is reported in the returned report, not as an error.
pub fn stream(osc: &mut ChaoticOscillator, config: &StreamConfig, trail: &mut Trail) -> Result<StreamReport, ChaosError> {
    config.validate()?;

    let dt = config.dt();
    let samples_per_frame = config.samples_per_frame();
    debug!(attractor = osc.name(), dt, samples_per_frame, frames = config.frames, "streaming");

    let mut report = StreamReport { frames: 0, halt: None };
    let mut pt = 0.0;
    trail.push(osc.voltage());

    'frames: while report.frames < config.frames {
        report.frames += 1;
        for _ in 0..samples_per_frame {
            osc.update(dt);
            if is_out_of_bounds(osc, config.radius) {
                let halt = Halt {
                    frame: report.frames,
                    time: osc.time(),
                    voltage: osc.voltage(),
                };
                error!(
                    attractor = osc.name(),
                    frame = halt.frame,
                    time = halt.time,
                    voltage = ?halt.voltage,
                    "oscillator diverged; halting"
                );
                report.halt = Some(halt);
                break 'frames;
            }
            pt += dt;
            if pt > config.plot_interval {
                pt = 0.0;
                trail.push(osc.voltage());
            }
        }
    }

    Ok(report)
}
