use super::CatalogTable;
use crate::{math::interpolation::is_strictly_ascending, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Rated capacities of SCN fenders.
///
/// Both tables have one row per size and one column per grade.
#[derive(Clone)]
pub struct ScnCatalog {
    dbgid: DbgId,
    grades: Vec<f64>,
    energy: CatalogTable,
    reaction: CatalogTable,
}
//
//
impl ScnCatalog {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Catalog] returns if `grades` are not strictly ascending,
    /// tables width differs from the number of grades,
    /// or the tables contain different sizes.
    pub fn new(
        parent: &DbgId,
        grades: Vec<f64>,
        energy: CatalogTable,
        reaction: CatalogTable,
    ) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "ScnCatalog");
        let callee = "new";
        if !is_strictly_ascending(&grades) {
            return Err(Error::Catalog(format!(
                "{}.{} | Grades must be strictly ascending, got {:?}",
                dbgid, callee, grades
            )));
        }
        for (name, table) in [("energy", &energy), ("reaction", &reaction)] {
            if !table.is_empty() && table.width() != grades.len() {
                return Err(Error::Catalog(format!(
                    "{}.{} | The {} table has {} columns, expected one per grade ({})",
                    dbgid,
                    callee,
                    name,
                    table.width(),
                    grades.len()
                )));
            }
        }
        if !energy.ids().eq(reaction.ids()) {
            return Err(Error::Catalog(format!(
                "{}.{} | The energy and reaction tables must list the same sizes",
                dbgid, callee
            )));
        }
        Ok(Self {
            dbgid,
            grades,
            energy,
            reaction,
        })
    }
    ///
    /// Returns rated energy (kNm) and rated reaction (kN) of the fender.
    ///
    /// # Errors
    /// [Error::CatalogLookup] returns if the size or the grade is not in the catalog.
    pub fn rated(&self, size: &str, grade: f64) -> Result<(f64, f64), Error> {
        let col = self.grade_column(grade)?;
        let energy = self.energy.row(size)?[col];
        let reaction = self.reaction.row(size)?[col];
        log::debug!(
            "{}.rated | size='{}' grade={} energy={} reaction={}",
            self.dbgid,
            size,
            grade,
            energy,
            reaction
        );
        Ok((energy, reaction))
    }
    ///
    /// Returns rated energies (kNm) of the `size`, one per grade.
    ///
    /// # Errors
    /// [Error::CatalogLookup] returns if the size is not in the catalog.
    pub fn energies(&self, size: &str) -> Result<&[f64], Error> {
        self.energy.row(size)
    }
    ///
    /// Returns the column of `grade`.
    ///
    /// # Errors
    /// [Error::CatalogLookup] returns if the grade is not in the catalog.
    pub(crate) fn grade_column(&self, grade: f64) -> Result<usize, Error> {
        self.grades
            .iter()
            .position(|val| (val - grade).abs() < 1e-9)
            .ok_or_else(|| {
                Error::CatalogLookup(format!(
                    "{}.grade_column | Unknown grade F{}, expected one of {:?}",
                    self.dbgid, grade, self.grades
                ))
            })
    }
    ///
    /// Returns sizes in the catalog order.
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.energy.ids()
    }
    ///
    /// Returns grades in ascending order.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }
}
