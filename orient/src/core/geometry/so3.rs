use glam::{DMat3, DVec3};

use crate::core::math::{Tolerance, entry, sign, trace};

/// Which closed form the SO(3) logarithm used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBranch {
    /// θ ≈ 0: the identity, axis undefined.
    Identity,
    /// sin θ ≈ 0 with θ ≈ π: the Rodrigues quotient is 0/0.
    HalfTurn,
    /// Everything else.
    General,
}

impl LogBranch {
    pub fn classify(theta: f64, tolerance: Tolerance) -> Self {
        if tolerance.is_zero(theta) {
            Self::Identity
        } else if tolerance.is_zero(theta.sin()) {
            Self::HalfTurn
        } else {
            Self::General
        }
    }
}

/// Rotation angle of `r` in [0, π].
///
/// For a rotation this is `acos((tr R - 1) / 2)`. The cosine is clamped to
/// [-1, 1] and paired with the sine read off the skew-symmetric part, so the
/// angle keeps full precision next to 0 and π and never becomes NaN.
pub fn rotation_angle(r: &DMat3) -> f64 {
    let cos_theta = ((trace(r) - 1.0) / 2.0).clamp(-1.0, 1.0);
    let sin_theta = vee_skew(r).length() / 2.0;
    sin_theta.atan2(cos_theta)
}

/// `vee(R - Rᵀ)`, which is `2 sin θ n` for a rotation about `n`.
fn vee_skew(r: &DMat3) -> DVec3 {
    DVec3::new(
        entry(r, 2, 1) - entry(r, 1, 2),
        entry(r, 0, 2) - entry(r, 2, 0),
        entry(r, 1, 0) - entry(r, 0, 1),
    )
}

/// Logarithmic map SO(3) -> so(3) with the default tolerance.
///
/// The result points along the rotation axis and its length is the rotation
/// angle.
pub fn logarithm(r: &DMat3) -> DVec3 {
    logarithm_with(r, Tolerance::default())
}

pub fn logarithm_with(r: &DMat3, tolerance: Tolerance) -> DVec3 {
    let theta = rotation_angle(r);
    let branch = LogBranch::classify(theta, tolerance);
    tracing::trace!(theta, ?branch, "so(3) logarithm");

    match branch {
        LogBranch::Identity => DVec3::ZERO,
        LogBranch::HalfTurn => half_turn_axis(r) * theta,
        LogBranch::General => {
            // W = θ / (2 sin θ) (R - Rᵀ), read back through vee.
            let w = (*r - r.transpose()) * (theta / (2.0 * theta.sin()));
            DVec3::new(entry(&w, 2, 1), entry(&w, 0, 2), entry(&w, 1, 0))
        }
    }
}

/// Unit axis of a half-turn.
///
/// At θ = π, R = 2nnᵀ - I: the diagonal gives |nᵢ| and the off-diagonal
/// products give the relative signs. The dominant component takes its sign
/// from the fixed pattern x ~ R(1,2), y ~ -R(0,2), z ~ -R(1,0); the others
/// follow from their product with it.
fn half_turn_axis(r: &DMat3) -> DVec3 {
    let magnitude = |i: usize| ((entry(r, i, i) + 1.0) / 2.0).max(0.0).sqrt();
    let mut axis = DVec3::new(magnitude(0), magnitude(1), magnitude(2));

    let pivot = if axis.x >= axis.y && axis.x >= axis.z {
        0
    } else if axis.y >= axis.z {
        1
    } else {
        2
    };
    let pivot_sign = match pivot {
        0 => sign(entry(r, 1, 2)),
        1 => -sign(entry(r, 0, 2)),
        _ => -sign(entry(r, 1, 0)),
    };

    for i in 0..3 {
        if i == pivot {
            axis[i] *= pivot_sign;
        } else {
            let product = entry(r, i, pivot) + entry(r, pivot, i);
            axis[i] *= pivot_sign * sign(product);
        }
    }
    axis
}
