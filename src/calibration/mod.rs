//! Calibration Module: Empirical Range and Stability Discovery
//!
//! Offline tools, never on the real-time path:
//!
//! - **Range discovery**: settle, then measure the raw min/max per axis
//! - **Max-step search**: dilate the Euler step until a trial leaves the
//!   known voltage range
//!
//! Neither attempts recovery. A failing run reports the offending axis
//! and value and stops.

mod bounds;
mod range;
mod stability;

pub use bounds::{check_limits, is_out_of_bounds, Axis, OutOfBounds, DISPLAY_RADIUS, RANGE_LIMIT};
pub use range::{discover_range, Phase, RangeConfig, RangeReport, SAMPLE_RATE};
pub use stability::{search_max_dt, StabilityConfig, StabilityFailure, StabilityReport};
