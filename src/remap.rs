//! Remap: Raw Attractor Coordinates to Output Voltage
//!
//! A known range [vmin, vmax] is mapped linearly onto
//! [-AMPLITUDE, +AMPLITUDE]:
//!
//!   r = (v - vmin) / (vmax - vmin)
//!   V = AMPLITUDE · (2r - 1)
//!
//! Values outside the range map outside the voltage interval; there is
//! no clamping. A degenerate range (vmax ≤ vmin) is passthrough, which
//! is how uncalibrated attractors are observed.

/// Intended peak amplitude of the output voltage
pub const AMPLITUDE: f64 = 5.0;

/// Remap `v` from [vmin, vmax] to [-AMPLITUDE, +AMPLITUDE].
pub fn remap(v: f64, vmin: f64, vmax: f64) -> f64 {
    if vmax <= vmin {
        return v;
    }

    let r = (v - vmin) / (vmax - vmin);
    AMPLITUDE * (2.0 * r - 1.0)
}
