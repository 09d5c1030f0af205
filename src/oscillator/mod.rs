//! Oscillator Module: Time Evolution of an Attractor
//!
//! - [`ChaoticOscillator`]: oversampled forward-Euler integrator with raw
//!   and voltage accessors
//! - [`Trail`]: bounded history of output points
//! - [`stream`]: frame-driven stepping that halts on divergence

mod integrator;
mod stream;
mod trail;

pub use self::integrator::{ChaoticOscillator, MAX_SUBSTEPS};
pub use self::stream::{stream, Halt, StreamConfig, StreamReport};
pub use self::trail::{Trail, DEFAULT_TRAIL_LENGTH};
