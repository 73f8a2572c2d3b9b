use glam::DMat3;
use serde::{Deserialize, Serialize};

use super::frame::{DisplayFrame, frame_from_vector_with};
use super::so3::logarithm_with;
use crate::core::math::Tolerance;

/// How two rotations are combined in compare mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Operator {
    /// Rotation from RHS to LHS: `log(LHS · RHSᵀ)`.
    #[default]
    Subtract,
    /// Selectable in the input panel but has no defined composition yet.
    /// Nothing is computed while it is selected.
    Add,
}

/// `lhs · rhsᵀ`. The transpose stands in for the inverse, so `rhs` must be
/// orthonormal.
pub fn relative_rotation(lhs: &DMat3, rhs: &DMat3) -> DMat3 {
    *lhs * rhs.transpose()
}

/// Arrow frame and length for the rotation taking `rhs` to `lhs`.
pub fn relative_orientation(lhs: &DMat3, rhs: &DMat3) -> DisplayFrame {
    relative_orientation_with(lhs, rhs, Tolerance::default())
}

pub fn relative_orientation_with(
    lhs: &DMat3,
    rhs: &DMat3,
    tolerance: Tolerance,
) -> DisplayFrame {
    let composed = relative_rotation(lhs, rhs);
    let delta = logarithm_with(&composed, tolerance);
    frame_from_vector_with(delta, tolerance)
}

/// Applies `operator`; `None` means there is nothing new to show.
pub fn compare(
    lhs: &DMat3,
    rhs: &DMat3,
    operator: Operator,
    tolerance: Tolerance,
) -> Option<DisplayFrame> {
    match operator {
        Operator::Subtract => Some(relative_orientation_with(lhs, rhs, tolerance)),
        Operator::Add => {
            tracing::warn!(
                ?operator,
                "operator has no composition rule, keeping previous result"
            );
            None
        }
    }
}
