#[cfg(test)]
#[path = "../../tests/math/interpolation/grid_test.rs"]
mod tests;
//
use super::{is_strictly_ascending, Bound};
use crate::{math::OwnedSet, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Values defined over a rectangular set of (x, y) points.
///
/// Each grid cell is split into two triangles along the diagonal
/// from (x\[i], y\[j]) to (x\[i+1], y\[j+1]),
/// the value inside of a triangle is linear (barycentric).
/// Along the grid lines the result equals the 1-D linear interpolation.
///
/// Arguments outside of the grid are clamped to its nearest edge.
#[derive(Clone)]
pub struct Grid {
    dbgid: DbgId,
    xs: OwnedSet<f64>,
    ys: OwnedSet<f64>,
    ///
    /// Row-major by `ys`: the value at (xs\[i], ys\[j]) is `values[j * xs.len() + i]`.
    values: OwnedSet<f64>,
}
//
//
impl Grid {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if `xs` or `ys` has less than two
    /// or not strictly ascending values, or `values.len() != xs.len() * ys.len()`.
    pub fn new(
        parent: &DbgId,
        xs: impl Into<OwnedSet<f64>>,
        ys: impl Into<OwnedSet<f64>>,
        values: impl Into<OwnedSet<f64>>,
    ) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "Grid");
        let callee = "new";
        let (xs, ys, values) = (xs.into(), ys.into(), values.into());
        for (name, axis) in [("xs", &xs), ("ys", &ys)] {
            if axis.len() < 2 || !is_strictly_ascending(axis) {
                return Err(Error::Validation(format!(
                    "{}.{} | Axis '{}' must have at least two strictly ascending values, got {:?}",
                    dbgid, callee, name, axis
                )));
            }
        }
        if values.len() != xs.len() * ys.len() {
            return Err(Error::Validation(format!(
                "{}.{} | Expected {}x{} values, got {}",
                dbgid,
                callee,
                xs.len(),
                ys.len(),
                values.len()
            )));
        }
        Ok(Self {
            dbgid,
            xs,
            ys,
            values,
        })
    }
    ///
    /// Returns the value at (`x`, `y`).
    ///
    /// Returns _NaN_ if `x` or `y` is _NaN_.
    pub fn get(&self, x: f64, y: f64) -> f64 {
        let (Some((i, u)), Some((j, v))) = (
            Bound::of(&self.xs, x).segment(&self.xs, x),
            Bound::of(&self.ys, y).segment(&self.ys, y),
        ) else {
            return f64::NAN;
        };
        let f00 = self.at(i, j);
        let f10 = self.at(i + 1, j);
        let f01 = self.at(i, j + 1);
        let f11 = self.at(i + 1, j + 1);
        let result = if u >= v {
            f00 + u * (f10 - f00) + v * (f11 - f10)
        } else {
            f00 + v * (f01 - f00) + u * (f11 - f01)
        };
        log::trace!(
            "{}.get | x={} y={} cell=({}, {}) u={} v={} result={}",
            self.dbgid,
            x,
            y,
            i,
            j,
            u,
            v,
            result
        );
        result
    }
    ///
    /// Value at the grid node.
    fn at(&self, i: usize, j: usize) -> f64 {
        self.values[j * self.xs.len() + i]
    }
}
