//! Attractors Module: Chaotic ODE Systems as Voltage Sources
//!
//! Each variant implements the [`Attractor`] trait independently:
//!
//! - **Rucklidge**: double convection (tuned)
//! - **Aizawa**: sphere with axial tube (tuned)
//! - **Sprott**: minimal quadratic flow (tuned)
//! - **Bouali**: stretched loop (untuned, passthrough voltages)
//!
//! Variants are selected by short key through the [`registry`].

mod traits;
mod rucklidge;
mod aizawa;
mod sprott;
mod bouali;
pub mod registry;

pub use traits::{Attractor, AttractorState, AxisRange, CalibrationRange, SlopeVector};
pub use rucklidge::Rucklidge;
pub use aizawa::Aizawa;
pub use sprott::Sprott;
pub use bouali::Bouali;
pub use registry::{make_attractor, make_oscillator, AttractorKind, KINDS};
