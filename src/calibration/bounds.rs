//! Bounds Checks: Post-Step Divergence Detection
//!
//! The integrator never inspects its own output, so every consumer that
//! cares about divergence calls one of these after stepping.

use std::fmt;

use crate::oscillator::ChaoticOscillator;

/// Absolute bound used while discovering an attractor's range
pub const RANGE_LIMIT: f64 = 1000.0;

/// Voltage radius beyond which a running oscillator is considered lost
pub const DISPLAY_RADIUS: f64 = 20.0;

/// Phase-space axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// First axis found outside its bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfBounds {
    pub axis: Axis,
    pub value: f64,
}

/// Check x, y, z in order: each must be finite with |v| <= limit.
pub fn check_limits(values: [f64; 3], limit: f64) -> Result<(), OutOfBounds> {
    for (axis, value) in Axis::ALL.into_iter().zip(values) {
        if !value.is_finite() || value.abs() > limit {
            return Err(OutOfBounds { axis, value });
        }
    }
    Ok(())
}

/// Whether a running oscillator's voltage has left the sane region.
///
/// True if any voltage is non-finite or the voltage vector is longer
/// than `radius`. Consumers stop stepping when this trips.
pub fn is_out_of_bounds(osc: &ChaoticOscillator, radius: f64) -> bool {
    let [x, y, z] = osc.voltage();
    if !x.is_finite() || !y.is_finite() || !z.is_finite() {
        return true;
    }

    (x * x + y * y + z * z).sqrt() > radius
}
