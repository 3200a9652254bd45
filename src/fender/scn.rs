//!
//! Super cone (SCN) rubber fender.
//
mod material;
#[cfg(test)]
#[path = "../tests/fender/scn_test.rs"]
mod tests;
//
pub use material::Material;
//
use super::{
    CapacityFactor, Corrections, FenderEvent, FenderModel, FenderSpec, PerformanceCurve, Tolerance,
};
use crate::{catalog::ScnCatalog, math::interpolation::Table, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Energy angle factor beyond the table.
const ENERGY_ANGLE_RIGHT: f64 = 0.739;
///
/// Reaction angle factor beyond the table.
const REACTION_ANGLE_RIGHT: f64 = 0.8;
///
/// SCN fender of the given size and grade.
#[derive(Clone)]
pub struct Scn {
    dbgid: DbgId,
    size: String,
    grade: f64,
    material: Material,
    spec: FenderSpec,
    corrections: Corrections,
    angle: Table,
}
//
//
impl Scn {
    ///
    /// Creates a new instance.
    ///
    /// - `size` - catalog size, e. g. `SCN1050`, the trailing digits are the depth in mm,
    /// - `grade` - catalog grade, e. g. `1.1` for F1.1.
    ///
    /// # Errors
    /// - [Error::Validation] returns if the size has no trailing digits,
    /// - [Error::CatalogLookup] returns if the size or the grade is not in the catalog.
    pub fn new(
        parent: &DbgId,
        catalog: &ScnCatalog,
        size: &str,
        grade: f64,
        material: Material,
        tolerance: Tolerance,
    ) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, &format!("Scn({}-F{})", size, grade));
        let depth = Self::depth_of(size)?;
        let (rated_energy, rated_reaction) = catalog.rated(size, grade)?;
        let curve = PerformanceCurve::new(
            vec![
                0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65, 0.7,
                0.72, 0.75,
            ],
            vec![
                0.0, 0.01, 0.04, 0.08, 0.15, 0.22, 0.31, 0.4, 0.5, 0.59, 0.67, 0.75, 0.82, 0.89,
                0.96, 1.00, 1.06,
            ],
            vec![
                0.0, 0.20, 0.39, 0.58, 0.76, 0.90, 0.98, 1.00, 0.98, 0.94, 0.9, 0.88, 0.88, 0.90,
                0.96, 1.00, 1.10,
            ],
            None,
        )?;
        let spec = FenderSpec::new(depth, rated_energy, rated_reaction, None, tolerance, curve)?;
        let corrections = Corrections::standard(&dbgid)?;
        let angle = Table::new(
            &dbgid,
            vec![0.0, 3.0, 5.0, 8.0, 10.0, 15.0, 20.0],
            [
                vec![1.000, 1.039, 1.055, 1.029, 1.000, 0.856, 0.739],
                vec![1.000, 1.000, 1.000, 1.000, 1.000, 0.950, 0.800],
            ],
        )?;
        log::debug!(
            "{}.new | depth={} rated energy={} rated reaction={} material={}",
            dbgid,
            depth,
            rated_energy,
            rated_reaction,
            material
        );
        Ok(Self {
            dbgid,
            size: size.to_owned(),
            grade,
            material,
            spec,
            corrections,
            angle,
        })
    }
    ///
    /// Returns the depth (mm) encoded by the trailing digits of `size`.
    pub(crate) fn depth_of(size: &str) -> Result<f64, Error> {
        let size = size.trim();
        let digits = &size[size.trim_end_matches(|c: char| c.is_ascii_digit()).len()..];
        digits.parse::<u32>().map(f64::from).map_err(|err| {
            Error::Validation(format!(
                "Scn.depth_of | Size '{}' must end with the depth in mm: {}",
                size, err
            ))
        })
    }
    ///
    /// Returns (energy, reaction) angle factors at the `berthing_angle`, degrees.
    ///
    /// Both lookups use the same angle table,
    /// beyond it the energy factor is 0.739 and the reaction factor is 0.8.
    ///
    /// # Errors
    /// [Error::Validation] returns if the angle is not finite.
    pub fn angle_factor(&self, berthing_angle: f64) -> Result<(f64, f64), Error> {
        if !berthing_angle.is_finite() {
            return Err(Error::Validation(format!(
                "{}.angle_factor | Angle must be finite, got {}",
                self.dbgid, berthing_angle
            )));
        }
        let energy = self.angle.try_get(0, berthing_angle, Some(ENERGY_ANGLE_RIGHT))?;
        let reaction = self.angle.try_get(1, berthing_angle, Some(REACTION_ANGLE_RIGHT))?;
        log::debug!(
            "{}.angle_factor | angle={} energy={} reaction={}",
            self.dbgid,
            berthing_angle,
            energy,
            reaction
        );
        Ok((energy, reaction))
    }
    pub fn size(&self) -> &str {
        &self.size
    }
    pub fn grade(&self) -> f64 {
        self.grade
    }
    pub fn material(&self) -> Material {
        self.material
    }
}
//
//
impl FenderModel for Scn {
    //
    fn name(&self) -> String {
        format!("{}-F{}", self.size, self.grade)
    }
    //
    fn spec(&self) -> &FenderSpec {
        &self.spec
    }
    //
    fn velocity_factor(&self, velocity: f64) -> Result<f64, Error> {
        self.corrections
            .velocity_factor(self.material, self.spec.depth(), velocity)
    }
    //
    fn temperature_factor(&self, temperature: f64) -> Result<f64, Error> {
        self.corrections.temperature_factor(self.material, temperature)
    }
    ///
    /// - energy = energy angle factor * velocity factor * temperature factor (max temperature),
    /// - reaction = reaction angle factor * velocity factor * temperature factor (min temperature).
    fn capacity_factor(&self, event: &FenderEvent) -> Result<CapacityFactor, Error> {
        event.validate()?;
        let (energy_angle, reaction_angle) = self.angle_factor(event.berthing_angle)?;
        let velocity = self.velocity_factor(event.velocity)?;
        let energy_temperature = self.temperature_factor(event.max_temperature)?;
        let reaction_temperature = self.temperature_factor(event.min_temperature)?;
        let factor = CapacityFactor::new(
            energy_angle * velocity * energy_temperature,
            reaction_angle * velocity * reaction_temperature,
        );
        log::debug!("{}.capacity_factor | {:?}", self.dbgid, factor);
        Ok(factor)
    }
}
