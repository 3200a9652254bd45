#[cfg(test)]
#[path = "../tests/catalog/catalog_table_test.rs"]
mod tests;
//
use crate::{math::OwnedSet, Error};
use indexmap::IndexMap;
use sal_sync::services::entity::dbg_id::DbgId;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
///
/// Rated values keyed by fender identifier, in the catalog order.
///
/// The text source contains one row per identifier:
/// ```text
/// # comment
/// SCN300  8.0  8.7  9.6
/// SCN350  10.0 10.9 12.0
/// ```
/// All the rows must have the same number of values.
#[derive(Clone)]
pub struct CatalogTable {
    dbgid: DbgId,
    rows: IndexMap<String, OwnedSet<f64>>,
    width: usize,
}
//
//
impl CatalogTable {
    ///
    /// Creates an instance using `reader` as the source of rows.
    ///
    /// # Errors
    /// [Error::Catalog] returns if reading fails, a value can't be parsed,
    /// an identifier repeats, or the dataset is inconsistent.
    pub fn from_reader(parent: &DbgId, name: &str, reader: impl BufRead) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, &format!("CatalogTable({})", name));
        let callee = "from_reader";
        let mut rows = IndexMap::new();
        let mut width = None;
        for (try_line, line_id) in reader.lines().zip(1..) {
            let line = try_line.map_err(|err| {
                Error::Catalog(format!(
                    "{}.{} | Failed reading line={}: {}",
                    dbgid, callee, line_id, err
                ))
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut ss = line.split_ascii_whitespace();
            let Some(id) = ss.next() else {
                continue;
            };
            let mut vals = vec![];
            for s in ss {
                let val: f64 = s.parse().map_err(|err| {
                    Error::Catalog(format!(
                        "{}.{} | Failed parsing value '{}' at line={}: {}",
                        dbgid, callee, s, line_id, err
                    ))
                })?;
                if !val.is_finite() {
                    return Err(Error::Catalog(format!(
                        "{}.{} | Non-finite value at line={}",
                        dbgid, callee, line_id
                    )));
                }
                vals.push(val);
            }
            match width {
                None => width = Some(vals.len()),
                Some(width) if width != vals.len() => {
                    return Err(Error::Catalog(format!(
                        "{}.{} | Inconsistent dataset at line={}: expected {} values, got {}",
                        dbgid,
                        callee,
                        line_id,
                        width,
                        vals.len()
                    )))
                }
                Some(_) => {}
            }
            if rows.insert(id.to_owned(), OwnedSet::from(vals)).is_some() {
                return Err(Error::Catalog(format!(
                    "{}.{} | Duplicated identifier '{}' at line={}",
                    dbgid, callee, id, line_id
                )));
            }
        }
        log::debug!("{}.{} | Loaded {} rows", dbgid, callee, rows.len());
        Ok(Self {
            dbgid,
            rows,
            width: width.unwrap_or_default(),
        })
    }
    ///
    /// Creates an instance reading the file at `path`.
    ///
    /// # Errors
    /// [Error::Catalog] returns if the file can't be opened or its content is invalid.
    pub fn from_path(parent: &DbgId, name: &str, path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            Error::Catalog(format!(
                "{}/CatalogTable({}).from_path | Failed reading file='{}': {}",
                parent,
                name,
                path.display(),
                err
            ))
        })?;
        Self::from_reader(parent, name, BufReader::new(file))
    }
    ///
    /// Returns values of the row by `id`, if it is present.
    pub fn get(&self, id: &str) -> Option<&[f64]> {
        self.rows.get(id).map(|vals| &vals[..])
    }
    ///
    /// Returns values of the row by `id`.
    ///
    /// # Errors
    /// [Error::CatalogLookup] returns if there is no such a row.
    pub fn row(&self, id: &str) -> Result<&[f64], Error> {
        self.get(id).ok_or_else(|| {
            Error::CatalogLookup(format!("{}.row | Unknown identifier '{}'", self.dbgid, id))
        })
    }
    ///
    /// Returns identifiers in the catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(|id| id.as_str())
    }
    ///
    /// Returns the number of values in each row.
    pub fn width(&self) -> usize {
        self.width
    }
    ///
    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    ///
    /// Returns `true` if there is no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
