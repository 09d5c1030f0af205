//! Chaotic Oscillator: Oversampled Forward-Euler Integrator
//!
//! The oscillator owns one attractor and the current point in its phase
//! space. `update(dt)` advances simulated time by `dt`:
//!
//!   n  = ceil(dt / max_dt)     (n = 1 when no max_dt is declared)
//!   h  = dt / n
//!   repeat n times:  state += h · slopes(state)
//!
//! so every individual Euler step stays within the attractor's
//! empirically stable step size, whatever rate the caller runs at.
//! The substep count is capped at [`MAX_SUBSTEPS`]; beyond that the
//! substeps grow past `max_dt` and stability is no longer guaranteed.
//!
//! ## Divergence
//!
//! The integrator never checks its own output. An oversized step or
//! unsuitable constants can produce non-finite state; callers inspect
//! the state after each update (see [`crate::calibration`]).

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::attractors::{Attractor, AttractorState, CalibrationRange};
use crate::error::ChaosError;

/// Upper bound on the substeps of a single update
pub const MAX_SUBSTEPS: usize = 1 << 20;

/// An attractor plus its evolving state
pub struct ChaoticOscillator {
    /// Equations and constants
    attractor: Box<dyn Attractor>,
    /// Current phase-space position
    state: AttractorState,
    /// Output range, copied from the attractor
    range: CalibrationRange,
    /// Stability ceiling for a single Euler step
    max_dt: Option<f64>,
    /// Simulated time since the last initialize()
    time: f64,
}

impl ChaoticOscillator {
    pub fn new<A: Attractor + 'static>(attractor: A) -> Self {
        Self::from_boxed(Box::new(attractor))
    }

    pub fn from_boxed(attractor: Box<dyn Attractor>) -> Self {
        let state = attractor.initial_state();
        let range = attractor.calibration();
        let max_dt = attractor.max_dt().filter(|&m| m > 0.0);

        Self {
            attractor,
            state,
            range,
            max_dt,
            time: 0.0,
        }
    }

    /// Replace the stability ceiling. `None` or a non-positive value
    /// means single-step integration.
    pub fn with_max_dt(mut self, max_dt: Option<f64>) -> Self {
        self.set_max_dt(max_dt);
        self
    }

    pub fn set_max_dt(&mut self, max_dt: Option<f64>) {
        self.max_dt = max_dt.filter(|&m| m > 0.0);
    }

    /// Return to the attractor's initial state
    pub fn initialize(&mut self) {
        self.state = self.attractor.initial_state();
        self.time = 0.0;
    }

    /// Number of Euler substeps `update(dt)` performs.
    ///
    /// Zero for a non-finite `dt`, or when a ceiling is declared and `dt`
    /// is not positive. Never more than [`MAX_SUBSTEPS`].
    pub fn substeps_for(&self, dt: f64) -> usize {
        if !dt.is_finite() {
            return 0;
        }
        match self.max_dt {
            Some(max_dt) => ((dt / max_dt).ceil() as usize).min(MAX_SUBSTEPS),
            None => 1,
        }
    }

    /// Advance simulated time by `dt`, oversampling as needed.
    ///
    /// `dt <= 0` is not rejected: with a ceiling it is a no-op, without
    /// one it is a single Euler step of that size. A non-finite `dt` is
    /// always a no-op.
    pub fn update(&mut self, dt: f64) {
        let n = self.substeps_for(dt);
        if n == 0 {
            return;
        }

        let h = dt / n as f64;
        for _ in 0..n {
            self.euler(h);
        }
        self.time += dt;
    }

    /// Run multiple updates of the same size
    pub fn run(&mut self, n_updates: usize, dt: f64) {
        for _ in 0..n_updates {
            self.update(dt);
        }
    }

    /// One explicit Euler step of size `h`, ignoring the ceiling
    pub fn substep(&mut self, h: f64) {
        self.euler(h);
        self.time += h;
    }

    fn euler(&mut self, h: f64) {
        let s = self.attractor.slopes(&self.state);
        self.state.x += h * s.mx;
        self.state.y += h * s.my;
        self.state.z += h * s.mz;
    }

    /// Add zero-mean Gaussian noise to every coordinate.
    pub fn perturb<R: Rng + ?Sized>(&mut self, noise_std: f64, rng: &mut R) -> Result<(), ChaosError> {
        if noise_std < 0.0 {
            return Err(ChaosError::InvalidConfig("noise standard deviation must be non-negative"));
        }
        let normal = Normal::new(0.0, noise_std)?;

        self.state.x += normal.sample(rng);
        self.state.y += normal.sample(rng);
        self.state.z += normal.sample(rng);
        Ok(())
    }

    pub fn vx(&self) -> f64 {
        self.range.x.remap(self.state.x)
    }

    pub fn vy(&self) -> f64 {
        self.range.y.remap(self.state.y)
    }

    pub fn vz(&self) -> f64 {
        self.range.z.remap(self.state.z)
    }

    /// Voltages in x, y, z order
    pub fn voltage(&self) -> [f64; 3] {
        self.range.remap(&self.state)
    }

    pub fn rx(&self) -> f64 {
        self.state.x
    }

    pub fn ry(&self) -> f64 {
        self.state.y
    }

    pub fn rz(&self) -> f64 {
        self.state.z
    }

    pub fn state(&self) -> AttractorState {
        self.state
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn name(&self) -> &'static str {
        self.attractor.name()
    }

    pub fn calibration(&self) -> CalibrationRange {
        self.range
    }

    /// Whether the output range is known (voltages are remapped)
    pub fn is_tuned(&self) -> bool {
        self.range.is_known()
    }

    pub fn max_dt(&self) -> Option<f64> {
        self.max_dt
    }

    pub fn has_stability_protection(&self) -> bool {
        self.max_dt.is_some()
    }
}

impl std::fmt::Debug for ChaoticOscillator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChaoticOscillator")
            .field("attractor", &self.attractor.name())
            .field("state", &self.state)
            .field("max_dt", &self.max_dt)
            .field("time", &self.time)
            .finish()
    }
}
