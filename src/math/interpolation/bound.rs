#[cfg(test)]
#[path = "../../tests/math/interpolation/bound_test.rs"]
mod tests;
///
/// Position of a value within an ascending sequence of breakpoints.
#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) enum Bound {
    ///
    /// No bound: empty sequence or non-comparable value (e. g. _NaN_).
    None,
    ///
    /// At or below the first breakpoint.
    Below,
    ///
    /// Exact match of an inner breakpoint.
    Single(usize),
    ///
    /// Indexes of the two nearest neighbors.
    Range(usize, usize),
    ///
    /// At or above the last breakpoint.
    Above,
}
//
//
impl Bound {
    ///
    /// Returns the bound of `val` within `args`.
    ///
    /// # Note
    /// If `args` is not strictly ascending, the output is _meaningless_.
    pub(crate) fn of(args: &[f64], val: f64) -> Self {
        let (Some(first), Some(last)) = (args.first(), args.last()) else {
            return Bound::None;
        };
        if val.is_nan() {
            return Bound::None;
        }
        if val <= *first {
            return Bound::Below;
        }
        if val >= *last {
            return Bound::Above;
        }
        // first id where breakpoint is greater than `val`,
        // always in 1..args.len() here
        let insert_id = args.partition_point(|arg| *arg <= val);
        if args[insert_id - 1] == val {
            Bound::Single(insert_id - 1)
        } else {
            Bound::Range(insert_id - 1, insert_id)
        }
    }
    ///
    /// Returns the segment start index and the relative position within the segment
    /// for a sequence of at least two breakpoints.
    ///
    /// Out of range values are clamped to the first or the last segment.
    pub(crate) fn segment(self, args: &[f64], val: f64) -> Option<(usize, f64)> {
        let last_segment = args.len().checked_sub(2)?;
        match self {
            Bound::None => None,
            Bound::Below => Some((0, 0.0)),
            Bound::Above => Some((last_segment, 1.0)),
            Bound::Single(id) if id > last_segment => Some((last_segment, 1.0)),
            Bound::Single(id) => Some((id, 0.0)),
            Bound::Range(start, end) => {
                let width = args[end] - args[start];
                Some((start, (val - args[start]) / width))
            }
        }
    }
}
