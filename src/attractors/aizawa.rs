//! Aizawa Attractor
//!
//!   dx/dt = (z - b)·x - d·y
//!   dy/dt = d·x + (z - b)·y
//!   dz/dt = c + a·z - z³/3 - (x² + y²)(1 + e·z) + f·z·x³
//!
//! The trajectory winds around a sphere-like surface with a tube along
//! the z axis. It is the stiffest of the tuned variants: forward Euler
//! needs steps of 0.0007 or less.
//!
//! ## References
//!
//! - http://www.3d-meier.de/tut19/Seite3.html

use super::traits::{Attractor, AttractorState, CalibrationRange, SlopeVector};

/// Aizawa attractor
#[derive(Debug, Clone)]
pub struct Aizawa {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Aizawa {
    pub fn new() -> Self {
        Self {
            a: 0.95,
            b: 0.7,
            c: 0.6,
            d: 3.5,
            e: 0.25,
            f: 0.1,
        }
    }
}

impl Default for Aizawa {
    fn default() -> Self {
        Self::new()
    }
}

impl Attractor for Aizawa {
    fn name(&self) -> &'static str {
        "Aizawa"
    }

    fn slopes(&self, s: &AttractorState) -> SlopeVector {
        let (x, y, z) = (s.x, s.y, s.z);
        SlopeVector::new(
            (z - self.b) * x - self.d * y,
            self.d * x + (z - self.b) * y,
            self.c + self.a * z - z * z * z / 3.0 - (x * x + y * y) * (1.0 + self.e * z)
                + self.f * z * x * x * x,
        )
    }

    fn initial_state(&self) -> AttractorState {
        AttractorState::new(0.440125, -0.781267, -0.277170)
    }

    fn calibration(&self) -> CalibrationRange {
        CalibrationRange::new(
            -1.505, 1.490,
            -1.455, 1.530,
            -0.370, 1.853,
        )
    }

    fn max_dt(&self) -> Option<f64> {
        Some(0.0007)
    }
}
