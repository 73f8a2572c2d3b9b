use glam::{DMat3, DMat4, DVec3};

use crate::core::math::{HouseholderQr, Tolerance};

/// Column permutation moving the QR column aligned with the target into the
/// last slot, the arrow mesh's forward axis: new c0 = c1, c1 = c2, c2 = c0.
const FORWARD_LAST: DMat3 = DMat3::from_cols(DVec3::Y, DVec3::Z, DVec3::X);

/// An orthonormal, right-handed frame for orienting the arrow mesh, plus the
/// arrow length.
///
/// The third column points along the (display-space) vector the frame was
/// built from. The other two columns are one valid completion, not a
/// canonical axis-angle conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayFrame {
    pub rotation: DMat3,
    pub magnitude: f64,
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DisplayFrame {
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
        magnitude: 0.0,
    };

    /// The forward (third) column.
    pub fn forward(&self) -> DVec3 {
        self.rotation.z_axis
    }

    /// `[[F, 0], [0, 1]]`.
    pub fn to_homogeneous(&self) -> DMat4 {
        DMat4::from_mat3(self.rotation)
    }

    /// Column-major single-precision copy of the homogeneous matrix, the
    /// layout a uniform buffer expects.
    pub fn uniform_columns(&self) -> [f32; 16] {
        self.to_homogeneous().as_mat4().to_cols_array()
    }
}

/// Maps an so(3) vector into the display space: the y axis is mirrored.
pub fn to_display_space(v: DVec3) -> DVec3 {
    DVec3::new(v.x, -v.y, v.z)
}

/// Builds a display frame whose forward column points along `v` (after the
/// display-space y flip) and whose magnitude is `|v|`.
pub fn frame_from_vector(v: DVec3) -> DisplayFrame {
    frame_from_vector_with(v, Tolerance::default())
}

pub fn frame_from_vector_with(v: DVec3, tolerance: Tolerance) -> DisplayFrame {
    let target = to_display_space(v);
    let magnitude = target.length();
    if tolerance.is_zero(magnitude) {
        return DisplayFrame::IDENTITY;
    }

    // Q's first column is ±target/|target| whatever the other two columns are.
    let basis = DMat3::from_cols(target, target + DVec3::Y, target + DVec3::Z);
    let mut rotation = HouseholderQr::new(&basis).q() * FORWARD_LAST;

    // One or two reflections: make the frame right-handed through the free column.
    if rotation.determinant() < 0.0 {
        rotation.x_axis = -rotation.x_axis;
    }

    // Q is only defined up to column signs. Flipping two columns together
    // keeps det = +1.
    if rotation.z_axis.dot(target) < 0.0 {
        rotation.y_axis = -rotation.y_axis;
        rotation.z_axis = -rotation.z_axis;
    }

    DisplayFrame {
        rotation,
        magnitude,
    }
}
