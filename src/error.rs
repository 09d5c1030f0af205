use thiserror::Error;

use crate::calibration::{Axis, Phase};

/// Unified error type for oscillator construction and calibration.
#[derive(Error, Debug)]
pub enum ChaosError {
    #[error("unknown chaotic oscillator kind '{0}'")]
    UnknownKind(String),
    #[error("{axis} is out of bounds during {phase} at sample {sample}: {value}")]
    Diverged {
        phase: Phase,
        axis: Axis,
        value: f64,
        sample: u64,
    },
    #[error("{0} has no known calibration range")]
    Untuned(&'static str),
    #[error("invalid calibration settings: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid perturbation: {0}")]
    Noise(#[from] rand_distr::NormalError),
}

impl ChaosError {
    /// Offending axis, for divergence errors
    pub fn axis(&self) -> Option<Axis> {
        match self {
            ChaosError::Diverged { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}
