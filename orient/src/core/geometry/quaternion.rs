use glam::DMat3;
use serde::{Deserialize, Serialize};

use crate::core::math::from_rows;

/// A rotation quaternion `w + xi + yj + zk`.
///
/// Unit norm is assumed, not enforced: the entries come straight from the
/// input fields and are converted with the closed-form matrix formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Builds from the `x, y, z, w` order the input fields are laid out in.
    pub const fn from_xyzw(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { w, x, y, z }
    }

    pub fn to_rotation(&self) -> DMat3 {
        quaternion_to_rotation(self.w, self.x, self.y, self.z)
    }
}

/// Rotation matrix of the quaternion `(w, x, y, z)`.
///
/// Diagonal terms use the `2(w² + a²) - 1` form, so non-unit input is
/// converted as typed rather than renormalized.
pub fn quaternion_to_rotation(w: f64, x: f64, y: f64, z: f64) -> DMat3 {
    let (ww, xx, yy, zz) = (w.powi(2), x.powi(2), y.powi(2), z.powi(2));
    from_rows([
        [
            2.0 * (ww + xx) - 1.0,
            2.0 * (x * y - w * z),
            2.0 * (x * z + w * y),
        ],
        [
            2.0 * (x * y + w * z),
            2.0 * (ww + yy) - 1.0,
            2.0 * (y * z - w * x),
        ],
        [
            2.0 * (x * z - w * y),
            2.0 * (y * z + w * x),
            2.0 * (ww + zz) - 1.0,
        ],
    ])
}
