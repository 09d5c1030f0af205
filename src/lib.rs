//! # Analog Chaos
//!
//! Chaotic Attractors as Bounded Voltage Sources
//!
//! This crate simulates three-dimensional chaotic flows (Rucklidge,
//! Aizawa, Sprott, Bouali) and turns their trajectories into signals in
//! a fixed symmetric range, suitable as continuously varying control
//! voltages for audio synthesis.
//!
//! ## Numerical Core
//!
//! 1. **Attractors**: each variant supplies its slope function, an
//!    initial state, an empirically measured output range, and the
//!    largest forward-Euler step it tolerates.
//!
//! 2. **Oscillator**: forward Euler with adaptive oversampling. A
//!    requested step larger than the attractor's `max_dt` is split into
//!    `ceil(dt / max_dt)` equal substeps, so callers may step at any
//!    rate.
//!
//! 3. **Remap**: the known range of each axis maps linearly onto
//!    [-AMPLITUDE, +AMPLITUDE]. Unknown ranges pass raw values through.
//!
//! 4. **Calibration**: ranges and stable step sizes are discovered by
//!    simulation, not derived. See [`calibration`].
//!
//! ## Usage
//!
//! ```
//! use analog_chaos::make_oscillator;
//!
//! let mut osc = make_oscillator("ruck").expect("registered kind");
//! for _ in 0..4410 {
//!     osc.update(1.0 / 44100.0);
//! }
//! let [vx, vy, vz] = osc.voltage();
//! assert!(vx.is_finite() && vy.is_finite() && vz.is_finite());
//! ```
//!
//! ## Divergence
//!
//! The integrator never checks its output. Consumers inspect the state
//! after stepping ([`is_out_of_bounds`], [`check_limits`]) and stop when
//! it has left the sane region.

pub mod attractors;
pub mod calibration;
pub mod error;
pub mod oscillator;
pub mod remap;
pub mod telemetry;

// Re-exports from attractors
pub use attractors::{
    Attractor,
    AttractorState,
    AxisRange,
    CalibrationRange,
    SlopeVector,
    Rucklidge,
    Aizawa,
    Sprott,
    Bouali,
    AttractorKind,
    KINDS,
    make_attractor,
    make_oscillator,
};

// Re-exports from oscillator
pub use oscillator::{
    stream,
    ChaoticOscillator,
    Halt,
    StreamConfig,
    StreamReport,
    Trail,
    DEFAULT_TRAIL_LENGTH,
    MAX_SUBSTEPS,
};

// Re-exports from remap
pub use remap::{remap, AMPLITUDE};

// Re-exports from calibration
pub use calibration::{
    Axis,
    Phase,
    check_limits,
    is_out_of_bounds,
    discover_range,
    search_max_dt,
    RangeConfig,
    RangeReport,
    StabilityConfig,
    StabilityReport,
    StabilityFailure,
    DISPLAY_RADIUS,
    RANGE_LIMIT,
    SAMPLE_RATE,
};

pub use error::ChaosError;
