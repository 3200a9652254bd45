use super::CatalogTable;
use crate::{fender::PressureRating, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Rated capacities of pneumatic fenders.
///
/// Each table row is `<diameter>x<length> <energy> <reaction> <hull pressure>`.
#[derive(Clone)]
pub struct PneumaticCatalog {
    dbgid: DbgId,
    kpa50: CatalogTable,
    kpa80: CatalogTable,
}
//
//
impl PneumaticCatalog {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Catalog] returns if a non-empty table has not exactly three columns.
    pub fn new(parent: &DbgId, kpa50: CatalogTable, kpa80: CatalogTable) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "PneumaticCatalog");
        for (pressure, table) in [(PressureRating::Kpa50, &kpa50), (PressureRating::Kpa80, &kpa80)] {
            if !table.is_empty() && table.width() != 3 {
                return Err(Error::Catalog(format!(
                    "{}.new | The {} table has {} columns, expected 3 (energy, reaction, pressure)",
                    dbgid,
                    pressure,
                    table.width()
                )));
            }
        }
        Ok(Self {
            dbgid,
            kpa50,
            kpa80,
        })
    }
    ///
    /// Returns rated energy (kNm), rated reaction (kN) and rated hull pressure (kPa) of the fender.
    ///
    /// # Errors
    /// [Error::CatalogLookup] returns if the size is not in the catalog.
    pub fn rated(&self, size: &str, pressure: PressureRating) -> Result<(f64, f64, f64), Error> {
        let row = self.table(pressure).row(size)?;
        log::debug!(
            "{}.rated | size='{}' pressure={} energy={} reaction={} hull pressure={}",
            self.dbgid,
            size,
            pressure,
            row[0],
            row[1],
            row[2]
        );
        Ok((row[0], row[1], row[2]))
    }
    ///
    /// Returns sizes rated for `pressure` in the catalog order.
    pub fn sizes(&self, pressure: PressureRating) -> impl Iterator<Item = &str> {
        self.table(pressure).ids()
    }
    //
    //
    fn table(&self, pressure: PressureRating) -> &CatalogTable {
        match pressure {
            PressureRating::Kpa50 => &self.kpa50,
            PressureRating::Kpa80 => &self.kpa80,
        }
    }
}
