//! Attractor Traits: Shared Contract for Chaotic Oscillator Variants
//!
//! Every attractor is a fixed set of three coupled ODEs plus the
//! empirical facts needed to drive it as a voltage source:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Attractor Trait                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  + slopes(state)    - (dx/dt, dy/dt, dz/dt) at a state       │
//! │  + initial_state()  - Starting point on (or near) attractor  │
//! │  + calibration()    - Known output range per axis            │
//! │  + max_dt()         - Largest stable single Euler step       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Variants own only immutable constants. All mutable state lives in
//! the oscillator that drives them.

use std::fmt;

use crate::remap::remap;

/// Position in phase space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttractorState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AttractorState {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Coordinates in x, y, z order
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Instantaneous derivative (dx/dt, dy/dt, dz/dt)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeVector {
    pub mx: f64,
    pub my: f64,
    pub mz: f64,
}

impl SlopeVector {
    pub const fn new(mx: f64, my: f64, mz: f64) -> Self {
        Self { mx, my, mz }
    }
}

/// Empirical [min, max] of one axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range is usable for remapping only when max > min.
    pub fn is_known(&self) -> bool {
        self.max > self.min
    }

    /// Remap a raw value of this axis into voltage.
    pub fn remap(&self, v: f64) -> f64 {
        remap(v, self.min, self.max)
    }

    /// Widen the range to cover `v`.
    pub fn include(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// Empty range ready to be widened by [`AxisRange::include`].
    pub(crate) const fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

/// Per-axis output range of an attractor
///
/// All-zero means "not yet measured": remapping passes raw values
/// through until the range has been discovered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalibrationRange {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

impl CalibrationRange {
    pub const UNKNOWN: Self = Self {
        x: AxisRange::new(0.0, 0.0),
        y: AxisRange::new(0.0, 0.0),
        z: AxisRange::new(0.0, 0.0),
    };

    pub const fn new(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        zmin: f64,
        zmax: f64,
    ) -> Self {
        Self {
            x: AxisRange::new(xmin, xmax),
            y: AxisRange::new(ymin, ymax),
            z: AxisRange::new(zmin, zmax),
        }
    }

    /// True when every axis has a usable range.
    pub fn is_known(&self) -> bool {
        self.x.is_known() && self.y.is_known() && self.z.is_known()
    }

    /// Remap a whole state into voltages.
    pub fn remap(&self, state: &AttractorState) -> [f64; 3] {
        [
            self.x.remap(state.x),
            self.y.remap(state.y),
            self.z.remap(state.z),
        ]
    }

    /// Axes in x, y, z order
    pub fn axes(&self) -> [AxisRange; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for CalibrationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x range: {:10.6} {:10.6}", self.x.min, self.x.max)?;
        writeln!(f, "y range: {:10.6} {:10.6}", self.y.min, self.y.max)?;
        write!(f, "z range: {:10.6} {:10.6}", self.z.min, self.z.max)
    }
}

/// Trait for chaotic attractors usable as voltage sources
pub trait Attractor: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Derivative of the state according to this attractor's equations.
    ///
    /// Must be a pure function of `state` and the attractor's constants.
    fn slopes(&self, state: &AttractorState) -> SlopeVector;

    /// Starting point used by `initialize()`
    fn initial_state(&self) -> AttractorState;

    /// Known output range, or [`CalibrationRange::UNKNOWN`]
    fn calibration(&self) -> CalibrationRange {
        CalibrationRange::UNKNOWN
    }

    /// Largest time step for which one forward Euler step is stable
    fn max_dt(&self) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_range_is_not_known() {
        assert!(!CalibrationRange::UNKNOWN.is_known());
        assert!(!CalibrationRange::default().is_known());
    }

    #[test]
    fn test_partially_known_range() {
        let range = CalibrationRange::new(-1.0, 1.0, -1.0, 1.0, 0.0, 0.0);
        assert!(range.x.is_known());
        assert!(!range.z.is_known());
        assert!(!range.is_known());
    }

    #[test]
    fn test_unknown_range_passes_through() {
        let state = AttractorState::new(3.5, -120.0, 0.25);
        let v = CalibrationRange::UNKNOWN.remap(&state);
        assert_eq!(v, [3.5, -120.0, 0.25]);
    }

    #[test]
    fn test_axis_include() {
        let mut axis = AxisRange::empty();
        assert!(!axis.is_known());
        for v in [0.5, -2.0, 3.0, 1.0] {
            axis.include(v);
        }
        assert_eq!(axis, AxisRange::new(-2.0, 3.0));
    }

    #[test]
    fn test_state_finite() {
        assert!(AttractorState::new(1.0, 2.0, 3.0).is_finite());
        assert!(!AttractorState::new(1.0, f64::NAN, 3.0).is_finite());
        assert!(!AttractorState::new(f64::INFINITY, 0.0, 0.0).is_finite());
    }
}
