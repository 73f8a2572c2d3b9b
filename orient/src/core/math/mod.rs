pub mod householder;
pub mod tolerance;

pub use householder::HouseholderQr;
pub use tolerance::{DEFAULT_TOLERANCE, Tolerance, sign};

use glam::DMat3;

/// Reads `m(row, col)`. glam stores matrices column-major.
#[inline]
pub fn entry(m: &DMat3, row: usize, col: usize) -> f64 {
    m.col(col)[row]
}

/// Builds a matrix from row-major entries.
#[inline]
pub fn from_rows(rows: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols_array_2d(&rows).transpose()
}

/// Row-major entries of `m`.
#[inline]
pub fn to_rows(m: &DMat3) -> [[f64; 3]; 3] {
    m.transpose().to_cols_array_2d()
}

#[inline]
pub fn trace(m: &DMat3) -> f64 {
    m.x_axis.x + m.y_axis.y + m.z_axis.z
}
