//! Bouali Attractor
//!
//!   dx/dt = x·(4 - y) + a·z
//!   dy/dt = -y·(1 - x²)
//!   dz/dt = -x·(1.5 - s·z) - 0.05·z
//!
//! with a = 0.3, s = 1.
//!
//! No output range has been measured for this variant yet, so its
//! voltages are the raw coordinates. Run `rangetest boul` to discover
//! the range before tuning it.
//!
//! ## References
//!
//! - Bouali, S. (2012). A novel strange attractor with a stretched loop.
//!   Nonlinear Dynamics 70, 2375-2381.

use super::traits::{Attractor, AttractorState, SlopeVector};

/// Bouali attractor (untuned)
#[derive(Debug, Clone)]
pub struct Bouali {
    a: f64,
    s: f64,
}

impl Bouali {
    pub fn new() -> Self {
        Self { a: 0.3, s: 1.0 }
    }
}

impl Default for Bouali {
    fn default() -> Self {
        Self::new()
    }
}

impl Attractor for Bouali {
    fn name(&self) -> &'static str {
        "Bouali"
    }

    fn slopes(&self, st: &AttractorState) -> SlopeVector {
        let (x, y, z) = (st.x, st.y, st.z);
        SlopeVector::new(
            x * (4.0 - y) + self.a * z,
            -y * (1.0 - x * x),
            -x * (1.5 - self.s * z) - 0.05 * z,
        )
    }

    fn initial_state(&self) -> AttractorState {
        AttractorState::new(1.0, 1.0, 0.0)
    }
}
