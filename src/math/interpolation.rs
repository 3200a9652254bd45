//!
//! Piecewise-linear lookups over sorted tables.
//!
//! The boundary policy is asymmetric:
//! - at or below the first breakpoint the first table value is returned,
//! - at or above the last breakpoint the caller's override is returned if given,
//!   the last table value otherwise.
//!
//! Out of range arguments are never an error.
//
mod bound;
mod grid;
mod spline;
mod table;
#[cfg(test)]
#[path = "../tests/math/interpolation_test.rs"]
mod tests;
//
pub(crate) use bound::Bound;
pub use grid::Grid;
pub use spline::Spline;
pub use table::Table;
///
/// Returns the value of `values` at `val`, linearly interpolated over ascending `args`.
///
/// - `right` - value to return at or above the last breakpoint,
///   the last of `values` is used if _None_.
///
/// Returns _NaN_ if `args` is empty, `val` is _NaN_,
/// or `args` and `values` have different lengths.
///
/// # Examples
/// ```
/// use fender_design::math::interpolation::interpolate;
/// //
/// let args = [0.0, 10.0, 20.0];
/// let values = [1.0, 2.0, 4.0];
/// assert_eq!(interpolate(-5.0, &args, &values, None), 1.0);
/// assert_eq!(interpolate(15.0, &args, &values, None), 3.0);
/// assert_eq!(interpolate(20.0, &args, &values, Some(0.5)), 0.5);
/// ```
pub fn interpolate(val: f64, args: &[f64], values: &[f64], right: Option<f64>) -> f64 {
    if args.len() != values.len() {
        log::warn!(
            "interpolate | args.len={} != values.len={}",
            args.len(),
            values.len()
        );
        return f64::NAN;
    }
    match Bound::of(args, val) {
        Bound::None => f64::NAN,
        Bound::Below => values[0],
        Bound::Above => right.unwrap_or(values[values.len() - 1]),
        Bound::Single(id) => values[id],
        Bound::Range(start, end) => {
            let ratio = (val - args[start]) / (args[end] - args[start]);
            let result = values[start] + ratio * (values[end] - values[start]);
            log::trace!(
                "interpolate | val={} between args[{}]={} and args[{}]={} with result={}",
                val,
                start,
                args[start],
                end,
                args[end],
                result
            );
            result
        }
    }
}
///
/// Checks that `args` are strictly ascending and contain no _NaN_.
pub(crate) fn is_strictly_ascending(args: &[f64]) -> bool {
    args.iter().all(|arg| !arg.is_nan()) && args.windows(2).all(|win| win[0] < win[1])
}
