use super::CatalogTable;
use crate::{fender::Compound, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Rated capacities of MV fenders per meter of the unit length.
///
/// Each table row is `<depth>x<length> <energy> <reaction>`.
#[derive(Clone)]
pub struct MvCatalog {
    dbgid: DbgId,
    compound_a: CatalogTable,
    compound_b: CatalogTable,
}
//
//
impl MvCatalog {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Catalog] returns if a non-empty table has not exactly two columns.
    pub fn new(
        parent: &DbgId,
        compound_a: CatalogTable,
        compound_b: CatalogTable,
    ) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "MvCatalog");
        for (compound, table) in [(Compound::A, &compound_a), (Compound::B, &compound_b)] {
            if !table.is_empty() && table.width() != 2 {
                return Err(Error::Catalog(format!(
                    "{}.new | The compound {} table has {} columns, expected 2 (energy, reaction)",
                    dbgid,
                    compound,
                    table.width()
                )));
            }
        }
        Ok(Self {
            dbgid,
            compound_a,
            compound_b,
        })
    }
    ///
    /// Returns rated energy (kNm/m) and rated reaction (kN/m) of the fender.
    ///
    /// # Errors
    /// [Error::CatalogLookup] returns if the size is not in the catalog.
    pub fn rated(&self, size: &str, compound: Compound) -> Result<(f64, f64), Error> {
        let row = self.table(compound).row(size)?;
        log::debug!(
            "{}.rated | size='{}' compound={} energy={}/m reaction={}/m",
            self.dbgid,
            size,
            compound,
            row[0],
            row[1]
        );
        Ok((row[0], row[1]))
    }
    ///
    /// Returns sizes of the `compound` in the catalog order.
    pub fn sizes(&self, compound: Compound) -> impl Iterator<Item = &str> {
        self.table(compound).ids()
    }
    //
    //
    fn table(&self, compound: Compound) -> &CatalogTable {
        match compound {
            Compound::A => &self.compound_a,
            Compound::B => &self.compound_b,
        }
    }
}
