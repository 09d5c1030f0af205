//! Sprott Attractor
//!
//!   dx/dt = a·(y - x)
//!   dy/dt = x·z
//!   dz/dt = b - y²
//!
//! with a = 2.5, b = 1.5.
//!
//! - http://www.3d-meier.de/tut19/Seite192.html

use super::traits::{Attractor, AttractorState, CalibrationRange, SlopeVector};

/// Sprott attractor
#[derive(Debug, Clone)]
pub struct Sprott {
    a: f64,
    b: f64,
}

impl Sprott {
    pub fn new() -> Self {
        Self { a: 2.5, b: 1.5 }
    }
}

impl Default for Sprott {
    fn default() -> Self {
        Self::new()
    }
}

impl Attractor for Sprott {
    fn name(&self) -> &'static str {
        "Sprott"
    }

    fn slopes(&self, s: &AttractorState) -> SlopeVector {
        SlopeVector::new(
            self.a * (s.y - s.x),
            s.x * s.z,
            self.b - s.y * s.y,
        )
    }

    fn initial_state(&self) -> AttractorState {
        AttractorState::new(0.010847, 0.003817, 0.485189)
    }

    fn calibration(&self) -> CalibrationRange {
        CalibrationRange::new(
            -3.860, 4.061,
            -5.565, 6.006,
            -8.437, 8.085,
        )
    }

    fn max_dt(&self) -> Option<f64> {
        Some(0.0001)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprott_slopes() {
        let s = Sprott::new().slopes(&AttractorState::new(1.0, 2.0, -1.0));
        assert!((s.mx - 2.5).abs() < 1e-12);
        assert_eq!(s.my, -1.0);
        assert!((s.mz - (1.5 - 4.0)).abs() < 1e-12);
    }
}
