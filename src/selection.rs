//!
//! Selection of the smallest catalog fender absorbing the design energy.
//!
//! A candidate suffices if
//! `rated energy * energy factor * (1 - tolerance) > design energy`,
//! candidates are checked in the catalog order.
//
#[cfg(test)]
#[path = "tests/selection_test.rs"]
mod tests;
//
use crate::{
    catalog::Catalog,
    fender::{Compound, Mv, PressureRating},
    Error,
};
use strum::IntoEnumIterator;
///
/// What is fixed by the designer, the rest is selected.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    ///
    /// The lowest sufficient grade of the SCN size.
    ScnBySize(String),
    ///
    /// The smallest sufficient SCN size of the grade.
    ScnByGrade(f64),
    ///
    /// Compound A, then B of the MV size.
    MvBySize(String),
    ///
    /// The smallest sufficient MV size of the compound.
    MvByCompound(Compound),
    ///
    /// 50kPa, then 80kPa of the pneumatic size.
    PneumaticBySize(String),
    ///
    /// The smallest sufficient pneumatic size of the pressure rating.
    PneumaticByPressure(PressureRating),
}
///
/// Energy to be absorbed and the reduction of the rated energy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Demand {
    ///
    /// kNm
    pub design_energy: f64,
    ///
    /// Energy capacity factor of the design conditions.
    pub energy_factor: f64,
    ///
    /// Manufacturing tolerance, fraction in [0, 1).
    pub tolerance: f64,
}
//
//
impl Demand {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if the design energy is negative,
    /// the energy factor is not positive, or the tolerance is outside of [0, 1).
    pub fn new(design_energy: f64, energy_factor: f64, tolerance: f64) -> Result<Self, Error> {
        if !(design_energy.is_finite() && design_energy >= 0.0)
            || !(energy_factor.is_finite() && energy_factor > 0.0)
            || !(0.0..1.0).contains(&tolerance)
        {
            return Err(Error::Validation(format!(
                "Demand.new | Invalid demand: design energy={} energy factor={} tolerance={}",
                design_energy, energy_factor, tolerance
            )));
        }
        Ok(Self {
            design_energy,
            energy_factor,
            tolerance,
        })
    }
    ///
    /// Returns `true` if the fender with `rated_energy` (kNm) absorbs the design energy.
    fn is_met_by(&self, rated_energy: f64) -> bool {
        rated_energy * self.energy_factor * (1.0 - self.tolerance) > self.design_energy
    }
}
///
/// Returns the identifier of the first sufficient fender,
/// e. g. `SCN1050-F1.1`, `1000x1000-B`, `1700x3000-50kPa`,
/// or _None_ if nothing in the catalog suffices.
///
/// # Errors
/// - [Error::CatalogLookup] returns if the fixed size or grade is not in the catalog,
/// - [Error::Validation] returns if the MV size is malformed.
pub fn recommend(catalog: &Catalog, request: &Request, demand: &Demand) -> Result<Option<String>, Error> {
    let result = match request {
        Request::ScnBySize(size) => {
            let energies = catalog.scn.energies(size)?;
            catalog
                .scn
                .grades()
                .iter()
                .zip(energies)
                .find(|(_, energy)| demand.is_met_by(**energy))
                .map(|(grade, _)| format!("{}-F{}", size, grade))
        }
        Request::ScnByGrade(grade) => {
            catalog.scn.grade_column(*grade)?;
            let mut found = None;
            for size in catalog.scn.sizes() {
                let (energy, _) = catalog.scn.rated(size, *grade)?;
                if demand.is_met_by(energy) {
                    found = Some(format!("{}-F{}", size, grade));
                    break;
                }
            }
            found
        }
        Request::MvBySize(size) => {
            let (_, length) = Mv::dimensions_of(size)?;
            let mut found = None;
            for compound in Compound::iter() {
                let (energy, _) = catalog.mv.rated(size, compound)?;
                if demand.is_met_by(energy * length / 1000.0) {
                    found = Some(format!("{}-{}", size, compound));
                    break;
                }
            }
            found
        }
        Request::MvByCompound(compound) => {
            let mut found = None;
            for size in catalog.mv.sizes(*compound) {
                let (_, length) = Mv::dimensions_of(size)?;
                let (energy, _) = catalog.mv.rated(size, *compound)?;
                if demand.is_met_by(energy * length / 1000.0) {
                    found = Some(format!("{}-{}", size, compound));
                    break;
                }
            }
            found
        }
        Request::PneumaticBySize(size) => {
            let mut found = None;
            for pressure in PressureRating::iter() {
                let (energy, _, _) = catalog.pneumatic.rated(size, pressure)?;
                if demand.is_met_by(energy) {
                    found = Some(format!("{}-{}", size, pressure));
                    break;
                }
            }
            found
        }
        Request::PneumaticByPressure(pressure) => {
            let mut found = None;
            for size in catalog.pneumatic.sizes(*pressure) {
                let (energy, _, _) = catalog.pneumatic.rated(size, *pressure)?;
                if demand.is_met_by(energy) {
                    found = Some(format!("{}-{}", size, pressure));
                    break;
                }
            }
            found
        }
    };
    match &result {
        Some(id) => log::debug!("recommend | {:?} {:?} => '{}'", request, demand, id),
        None => log::warn!("recommend | {:?} {:?} => nothing suffices", request, demand),
    }
    Ok(result)
}
