//! Rucklidge Attractor: Double-Convection Model
//!
//! Rucklidge's model of two-dimensional convection in a magnetic field:
//!
//!   dx/dt = -k·x + a·y - y·z
//!   dy/dt = x
//!   dz/dt = -z + y²
//!
//! with k = 2, a = 6.7 (chaotic regime).
//!
//! ## Calibration
//!
//! The output range below was measured over four hours of simulated
//! time at 44.1 kHz after a one-minute settle. Forward Euler is stable
//! for steps up to 0.002.
//!
//! ## References
//!
//! - Rucklidge, A. M. (1992). Chaos in models of double convection.
//!   J. Fluid Mech. 237, 209-229.
//! - http://www.3d-meier.de/tut19/Seite17.html

use super::traits::{Attractor, AttractorState, CalibrationRange, SlopeVector};

/// Rucklidge attractor
#[derive(Debug, Clone)]
pub struct Rucklidge {
    /// Damping
    k: f64,
    /// Forcing
    a: f64,
}

impl Rucklidge {
    pub fn new() -> Self {
        Self { k: 2.0, a: 6.7 }
    }
}

impl Default for Rucklidge {
    fn default() -> Self {
        Self::new()
    }
}

impl Attractor for Rucklidge {
    fn name(&self) -> &'static str {
        "Rucklidge"
    }

    fn slopes(&self, s: &AttractorState) -> SlopeVector {
        let (x, y, z) = (s.x, s.y, s.z);
        SlopeVector::new(
            -self.k * x + self.a * y - y * z,
            x,
            -z + y * y,
        )
    }

    fn initial_state(&self) -> AttractorState {
        AttractorState::new(0.788174, 0.522280, 1.250344)
    }

    fn calibration(&self) -> CalibrationRange {
        CalibrationRange::new(
            -10.144, 10.168,
            -5.570, 5.565,
            0.040, 15.387,
        )
    }

    fn max_dt(&self) -> Option<f64> {
        Some(0.002)
    }
}
