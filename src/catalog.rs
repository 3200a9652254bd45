//!
//! Static catalog of the fender rated capacities.
//!
//! The catalog is read once from text sources (see [CatalogTable])
//! and used read-only for the rest of the process.
//
mod catalog_table;
mod mv_catalog;
mod pneumatic_catalog;
mod scn_catalog;
#[cfg(test)]
#[path = "tests/catalog_test.rs"]
mod tests;
#[cfg(test)]
#[path = "tests/catalog/fixture.rs"]
pub(crate) mod fixture;
//
pub use catalog_table::CatalogTable;
pub use mv_catalog::MvCatalog;
pub use pneumatic_catalog::PneumaticCatalog;
pub use scn_catalog::ScnCatalog;
//
use crate::Error;
use sal_sync::services::entity::dbg_id::DbgId;
use std::path::PathBuf;
///
/// [Catalog] configuration.
///
/// It can be used to wrap configuration getting from an external source.
pub struct CatalogConf {
    ///
    /// SCN grades, one per column of the SCN tables, ascending.
    pub scn_grades: Vec<f64>,
    ///
    /// SCN rated energy, kNm.
    pub scn_energy_path: PathBuf,
    ///
    /// SCN rated reaction, kN.
    pub scn_reaction_path: PathBuf,
    ///
    /// MV compound A rated energy and reaction per meter.
    pub mv_compound_a_path: PathBuf,
    ///
    /// MV compound B rated energy and reaction per meter.
    pub mv_compound_b_path: PathBuf,
    ///
    /// Pneumatic 50 kPa rated energy, reaction and hull pressure.
    pub pneumatic_50_path: PathBuf,
    ///
    /// Pneumatic 80 kPa rated energy, reaction and hull pressure.
    pub pneumatic_80_path: PathBuf,
}
//
//
impl CatalogConf {
    ///
    /// Returns the configuration of the catalog stored in `dir`
    /// with default file names:
    /// `scn_energy`, `scn_reaction`, `mv_a`, `mv_b`, `pneumatic_50`, `pneumatic_80`.
    pub fn with_dir(dir: impl Into<PathBuf>, scn_grades: Vec<f64>) -> Self {
        let dir = dir.into();
        Self {
            scn_grades,
            scn_energy_path: dir.join("scn_energy"),
            scn_reaction_path: dir.join("scn_reaction"),
            mv_compound_a_path: dir.join("mv_a"),
            mv_compound_b_path: dir.join("mv_b"),
            pneumatic_50_path: dir.join("pneumatic_50"),
            pneumatic_80_path: dir.join("pneumatic_80"),
        }
    }
}
///
/// Rated capacities of all supported fender types.
#[derive(Clone)]
pub struct Catalog {
    pub scn: ScnCatalog,
    pub mv: MvCatalog,
    pub pneumatic: PneumaticCatalog,
}
//
//
impl Catalog {
    ///
    /// Creates a new instance from already read parts.
    pub fn new(scn: ScnCatalog, mv: MvCatalog, pneumatic: PneumaticCatalog) -> Self {
        Self { scn, mv, pneumatic }
    }
    ///
    /// Reads all the catalog tables configured by `conf`.
    ///
    /// # Errors
    /// [Error::Catalog] returns if any of files can't be read or is inconsistent.
    pub fn load(parent: &DbgId, conf: &CatalogConf) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "Catalog");
        log::info!("{}.load | Loading...", dbgid);
        let scn = ScnCatalog::new(
            &dbgid,
            conf.scn_grades.clone(),
            CatalogTable::from_path(&dbgid, "scn_energy", &conf.scn_energy_path)?,
            CatalogTable::from_path(&dbgid, "scn_reaction", &conf.scn_reaction_path)?,
        )?;
        let mv = MvCatalog::new(
            &dbgid,
            CatalogTable::from_path(&dbgid, "mv_a", &conf.mv_compound_a_path)?,
            CatalogTable::from_path(&dbgid, "mv_b", &conf.mv_compound_b_path)?,
        )?;
        let pneumatic = PneumaticCatalog::new(
            &dbgid,
            CatalogTable::from_path(&dbgid, "pneumatic_50", &conf.pneumatic_50_path)?,
            CatalogTable::from_path(&dbgid, "pneumatic_80", &conf.pneumatic_80_path)?,
        )?;
        log::info!("{}.load | Loading - OK", dbgid);
        Ok(Self::new(scn, mv, pneumatic))
    }
}
