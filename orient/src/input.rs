use glam::DMat3;
use serde::{Deserialize, Serialize};

use crate::core::geometry::{Operator, Quaternion};
use crate::core::math::{from_rows, to_rows};

/// Which representation the user is entering. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// A quaternion, shown as the rotated reference frame.
    #[default]
    Quaternion,
    /// A single SO(3) matrix, shown as-is.
    Matrix,
    /// Two SO(3) matrices, shown as the arrow of their relative rotation.
    Compare,
}

/// Nine scalars as typed into the input grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixInput(pub [[f64; 3]; 3]);

impl Default for MatrixInput {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl MatrixInput {
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub fn from_rotation(m: &DMat3) -> Self {
        Self(to_rows(m))
    }

    pub fn to_rotation(&self) -> DMat3 {
        from_rows(self.0)
    }

    /// Sets one entry; `false` if the index is outside the 3x3 grid.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        match self.0.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(entry) => {
                *entry = value;
                true
            }
            None => false,
        }
    }
}

/// Selects one of the matrix grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixSlot {
    Matrix,
    Lhs,
    Rhs,
}

/// Every value the input panel can edit.
///
/// This is handed to the engine by value on each recompute; the engine keeps
/// no copy of it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationInput {
    pub mode: InputMode,
    pub quaternion: Quaternion,
    pub matrix: MatrixInput,
    pub lhs: MatrixInput,
    pub rhs: MatrixInput,
    pub operator: Operator,
}

impl OrientationInput {
    pub fn slot_mut(&mut self, slot: MatrixSlot) -> &mut MatrixInput {
        match slot {
            MatrixSlot::Matrix => &mut self.matrix,
            MatrixSlot::Lhs => &mut self.lhs,
            MatrixSlot::Rhs => &mut self.rhs,
        }
    }
}
