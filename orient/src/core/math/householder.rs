use glam::DMat3;

use super::{from_rows, tolerance::sign};

/// QR decomposition of a 3x3 matrix via Householder reflections: A = Q * R
///
/// Only the first two columns are reflected (the last 1x1 block needs no
/// reflection), and a column whose part below the diagonal is already zero is
/// skipped. The skip test is made on the column scaled to unit max-norm, so it
/// does not depend on the magnitude of the input. `Q` is therefore a product
/// of zero, one or two reflections and its determinant may be either +1 or -1.
#[derive(Debug, Clone, Copy)]
pub struct HouseholderQr {
    q: DMat3,
    r: DMat3,
}

impl HouseholderQr {
    /// Compute QR decomposition.
    pub fn new(a: &DMat3) -> Self {
        // Row-major working copies: r[i][j] is A(i, j).
        let mut r = a.transpose().to_cols_array_2d();
        let mut q = DMat3::IDENTITY.to_cols_array_2d();

        for k in 0..2 {
            let col_scale = r.iter().skip(k).fold(0.0_f64, |acc, row| acc.max(row[k].abs()));
            if col_scale == 0.0 {
                continue;
            }

            // Work on x / max|x| so tiny columns neither underflow nor get skipped.
            let mut v = [0.0; 3];
            for i in k..3 {
                v[i] = r[i][k] / col_scale;
            }
            let tail_sq: f64 = v.iter().skip(k + 1).map(|x| x * x).sum();
            if tail_sq <= f64::MIN_POSITIVE {
                continue;
            }
            let norm = (v[k] * v[k] + tail_sq).sqrt();

            // Reflect onto -sign(x_k) * |x| e_k so v_k never cancels.
            let alpha = -sign(v[k]) * norm;
            v[k] -= alpha;
            let alpha = alpha * col_scale;
            let v_sq: f64 = v.iter().map(|x| x * x).sum();

            // R <- H R
            for j in 0..3 {
                let mut s = 0.0;
                for i in k..3 {
                    s += v[i] * r[i][j];
                }
                let s = 2.0 * s / v_sq;
                for i in k..3 {
                    r[i][j] -= s * v[i];
                }
            }

            // Q <- Q H
            for row in q.iter_mut() {
                let mut s = 0.0;
                for j in k..3 {
                    s += row[j] * v[j];
                }
                let s = 2.0 * s / v_sq;
                for j in k..3 {
                    row[j] -= s * v[j];
                }
            }

            r[k][k] = alpha;
            for row in r.iter_mut().skip(k + 1) {
                row[k] = 0.0;
            }
        }

        Self {
            q: from_rows(q),
            r: from_rows(r),
        }
    }

    /// Get Q (orthogonal 3x3).
    pub fn q(&self) -> DMat3 {
        self.q
    }

    /// Get R (upper triangular).
    pub fn r(&self) -> DMat3 {
        self.r
    }
}
