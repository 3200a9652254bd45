#[cfg(test)]
#[path = "../../tests/math/interpolation/spline_test.rs"]
mod tests;
//
use super::is_strictly_ascending;
use crate::{math::OwnedSet, Error};
///
/// Interpolating cubic spline with the not-a-knot end conditions.
///
/// The third derivative is continuous at the second and the next to last knots.
/// Three knots give the parabola through them, two knots give the line.
#[derive(Clone, Debug, PartialEq)]
pub struct Spline {
    xs: OwnedSet<f64>,
    ys: OwnedSet<f64>,
    ///
    /// Second derivatives at the knots.
    m: OwnedSet<f64>,
}
//
//
impl Spline {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if there are less than two knots,
    /// `xs` and `ys` have different lengths or `xs` is not strictly ascending.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, Error> {
        let callee = "Spline.new";
        if xs.len() < 2 || xs.len() != ys.len() || !is_strictly_ascending(xs) {
            return Err(Error::Validation(format!(
                "{} | At least two strictly ascending knots with a value each required, got xs={:?} ys={:?}",
                callee, xs, ys
            )));
        }
        let m = Self::second_derivatives(xs, ys).ok_or_else(|| {
            Error::NumericDomain(format!("{} | Singular system, xs={:?}", callee, xs))
        })?;
        Ok(Self {
            xs: xs.into(),
            ys: ys.into(),
            m: m.into(),
        })
    }
    ///
    /// Returns the second derivatives at the knots.
    fn second_derivatives(xs: &[f64], ys: &[f64]) -> Option<Vec<f64>> {
        let n = xs.len();
        if n == 2 {
            return Some(vec![0.0; 2]);
        }
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let mut a = vec![vec![0.0; n]; n];
        let mut b = vec![0.0; n];
        for i in 1..n - 1 {
            a[i][i - 1] = h[i - 1];
            a[i][i] = 2.0 * (h[i - 1] + h[i]);
            a[i][i + 1] = h[i];
            b[i] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
        }
        if n == 3 {
            // single parabola, constant second derivative
            a[0][0] = 1.0;
            a[0][1] = -1.0;
            a[2][1] = -1.0;
            a[2][2] = 1.0;
        } else {
            a[0][0] = -h[1];
            a[0][1] = h[0] + h[1];
            a[0][2] = -h[0];
            a[n - 1][n - 3] = -h[n - 2];
            a[n - 1][n - 2] = h[n - 3] + h[n - 2];
            a[n - 1][n - 1] = -h[n - 3];
        }
        solve(a, b)
    }
    ///
    /// Returns the spline value at `x`.
    ///
    /// Arguments outside of the knots are clamped to the first or last knot.
    /// Returns _NaN_ if `x` is _NaN_.
    pub fn get(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let n = self.xs.len();
        let x = x.clamp(self.xs[0], self.xs[n - 1]);
        let hi = self.xs.partition_point(|knot| *knot <= x).clamp(1, n - 1);
        let lo = hi - 1;
        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;
        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a.powi(3) - a) * self.m[lo] + (b.powi(3) - b) * self.m[hi]) * h.powi(2) / 6.0
    }
}
///
/// Solves `a * x = b` by the Gaussian elimination with partial pivoting.
///
/// Returns _None_ if the matrix is singular.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|i, j| a[*i][col].abs().total_cmp(&a[*j][col].abs()))?;
        if a[pivot][col] == 0.0 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor != 0.0 {
                for k in col..n {
                    let val = factor * a[col][k];
                    a[row][k] -= val;
                }
                b[row] -= factor * b[col];
            }
        }
    }
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let sum: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - sum) / a[row][row];
    }
    Some(x)
}
