use serde::{Deserialize, Serialize};

/// Absolute tolerance for every "is this zero" test in the engine.
///
/// Loose values route genuine small rotations into the identity branch of the
/// logarithm, so keep this close to double precision.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// An absolute comparison tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tolerance(pub f64);

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}

impl Tolerance {
    pub const fn new(epsilon: f64) -> Self {
        Self(epsilon)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self, x: f64) -> bool {
        x.abs() < self.0
    }

}

/// Sign of `x` as ±1.0, with zero (and -0.0) counted as positive.
pub fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}
