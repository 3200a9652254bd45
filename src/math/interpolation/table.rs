#[cfg(test)]
#[path = "../../tests/math/interpolation/table_test.rs"]
mod tests;
//
use super::{interpolate, is_strictly_ascending};
use crate::{math::OwnedSet, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Correction factor table.
///
/// One ascending argument column and one or more value columns,
/// the value column is selected by the caller (e. g. by material or grade).
#[derive(Clone)]
pub struct Table {
    dbgid: DbgId,
    args: OwnedSet<f64>,
    columns: OwnedSet<OwnedSet<f64>>,
}
//
//
impl Table {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if at least one of the statements is true:
    /// - `args` is empty or not strictly ascending,
    /// - `columns` is empty,
    /// - a column length differs from `args` length.
    pub fn new(
        parent: &DbgId,
        args: impl Into<OwnedSet<f64>>,
        columns: impl IntoIterator<Item = Vec<f64>>,
    ) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "Table");
        let callee = "new";
        let args = args.into();
        if args.is_empty() || !is_strictly_ascending(&args) {
            return Err(Error::Validation(format!(
                "{}.{} | Arguments must be strictly ascending, got {:?}",
                dbgid, callee, args
            )));
        }
        let mut cols = vec![];
        for (col_id, col) in columns.into_iter().enumerate() {
            if col.len() != args.len() {
                return Err(Error::Validation(format!(
                    "{}.{} | Column {} has {} values, expected {}",
                    dbgid,
                    callee,
                    col_id,
                    col.len(),
                    args.len()
                )));
            }
            cols.push(OwnedSet::from(col));
        }
        if cols.is_empty() {
            return Err(Error::Validation(format!(
                "{}.{} | At least one value column required",
                dbgid, callee
            )));
        }
        Ok(Self {
            dbgid,
            args,
            columns: cols.into(),
        })
    }
    ///
    /// Returns the value of column `col` at `val`.
    ///
    /// See [interpolate] for the boundary policy and the meaning of `right`.
    /// Returns _None_ if the table has no column `col`.
    pub fn get(&self, col: usize, val: f64, right: Option<f64>) -> Option<f64> {
        self.columns.get(col).map(|values| {
            let result = interpolate(val, &self.args, values, right);
            log::trace!(
                "{}.get | col={} val={} right={:?} result={}",
                self.dbgid,
                col,
                val,
                right,
                result
            );
            result
        })
    }
    ///
    /// Returns the value of column `col` at `val`.
    ///
    /// # Errors
    /// [Error::Validation] returns if the table has no column `col`.
    pub fn try_get(&self, col: usize, val: f64, right: Option<f64>) -> Result<f64, Error> {
        self.get(col, val, right).ok_or_else(|| {
            Error::Validation(format!(
                "{}.try_get | No column {}, table has {} columns",
                self.dbgid,
                col,
                self.columns.len()
            ))
        })
    }
    ///
    /// Returns the argument column.
    pub fn args(&self) -> &[f64] {
        &self.args
    }
    ///
    /// Returns the number of value columns.
    pub fn columns(&self) -> usize {
        self.columns.len()
    }
}
