//!
//! Modular V-type (MV) rubber fender.
//
mod compound;
#[cfg(test)]
#[path = "../tests/fender/mv_test.rs"]
mod tests;
//
pub use compound::Compound;
//
use super::{
    CapacityFactor, Corrections, FenderEvent, FenderModel, FenderSpec, Material, PerformanceCurve,
    Tolerance,
};
use crate::{catalog::MvCatalog, math::interpolation::Grid, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Upper limit of the leg spacing to depth ratio.
const TRANSVERSE_RATIO_MAX: f64 = 2.0;
///
/// Upper limit of the length to depth ratio.
const LONGITUDINAL_RATIO_MAX: f64 = 4.0;
///
/// MV fender of the given size and compound.
#[derive(Clone)]
pub struct Mv {
    dbgid: DbgId,
    size: String,
    compound: Compound,
    length: f64,
    leg_spacing: f64,
    spec: FenderSpec,
    corrections: Corrections,
    transverse: Grid,
    longitudinal: Grid,
}
//
//
impl Mv {
    ///
    /// Creates a new instance.
    ///
    /// - `size` - catalog size `<depth>x<length>` in mm, e. g. `1000x1000`,
    /// - `leg_spacing` - distance between the fender legs, mm.
    ///
    /// Rated values are the catalog values per meter multiplied by the length.
    ///
    /// # Errors
    /// - [Error::Validation] returns if the size is malformed or `leg_spacing` is not positive,
    /// - [Error::CatalogLookup] returns if the size is not in the catalog.
    pub fn new(
        parent: &DbgId,
        catalog: &MvCatalog,
        size: &str,
        compound: Compound,
        leg_spacing: f64,
        tolerance: Tolerance,
    ) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, &format!("Mv({}-{})", size, compound));
        if !(leg_spacing.is_finite() && leg_spacing > 0.0) {
            return Err(Error::Validation(format!(
                "{}.new | Leg spacing must be positive, got {}",
                dbgid, leg_spacing
            )));
        }
        let (depth, length) = Self::dimensions_of(size)?;
        let (energy, reaction) = catalog.rated(size, compound)?;
        let (rated_energy, rated_reaction) = (energy * length / 1000.0, reaction * length / 1000.0);
        let curve = PerformanceCurve::new(
            vec![0.0, 0.05, 0.1, 0.15, 0.2, 0.28, 0.35, 0.4, 0.45, 0.5, 0.575, 0.625],
            vec![0.0, 0.02, 0.07, 0.14, 0.24, 0.41, 0.56, 0.66, 0.76, 0.85, 1.0, 1.13],
            vec![0.0, 0.31, 0.58, 0.78, 0.92, 1.0, 0.96, 0.9, 0.85, 0.84, 1.0, 1.3],
            None,
        )?;
        let spec = FenderSpec::new(depth, rated_energy, rated_reaction, None, tolerance, curve)?;
        let corrections = Corrections::standard(&dbgid)?;
        let angles = vec![0.0, 5.0, 10.0, 15.0];
        let transverse = Grid::new(
            &dbgid,
            angles.clone(),
            vec![1.2, 1.4, 1.6, 2.0],
            vec![
                1.00, 0.980, 0.960, 0.900,
                1.00, 0.970, 0.910, 0.830,
                1.00, 0.950, 0.875, 0.750,
                1.00, 0.925, 0.790, 0.630,
            ],
        )?;
        let longitudinal = Grid::new(
            &dbgid,
            angles,
            vec![0.625, 1.0, 2.0, 4.0],
            vec![
                0.990, 0.990, 0.930, 0.880,
                0.990, 0.970, 0.860, 0.730,
                0.990, 0.850, 0.640, 0.500,
                0.950, 0.620, 0.290, 0.200,
            ],
        )?;
        log::debug!(
            "{}.new | depth={} length={} rated energy={} rated reaction={}",
            dbgid,
            depth,
            length,
            rated_energy,
            rated_reaction
        );
        Ok(Self {
            dbgid,
            size: size.to_owned(),
            compound,
            length,
            leg_spacing,
            spec,
            corrections,
            transverse,
            longitudinal,
        })
    }
    ///
    /// Returns (depth, length) in mm parsed from `<depth>x<length>`.
    pub(crate) fn dimensions_of(size: &str) -> Result<(f64, f64), Error> {
        let err = |why: &str| {
            Error::Validation(format!(
                "Mv.dimensions_of | Size '{}' must be '<depth>x<length>': {}",
                size, why
            ))
        };
        let mut dims = size.trim().split(['x', 'X', '×']);
        let (Some(depth), Some(length), None) = (dims.next(), dims.next(), dims.next()) else {
            return Err(err("expected two dimensions"));
        };
        let parse = |dim: &str| -> Result<f64, Error> {
            match dim.trim().parse::<u32>() {
                Ok(0) => Err(err("zero dimension")),
                Ok(dim) => Ok(f64::from(dim)),
                Err(e) => Err(err(&e.to_string())),
            }
        };
        Ok((parse(depth)?, parse(length)?))
    }
    ///
    /// Returns the combined angle factor at the transverse (berthing)
    /// and longitudinal (bow flare) angles, degrees.
    ///
    /// # Errors
    /// [Error::Validation] returns if an angle is not finite.
    pub fn angle_factor(&self, transverse_angle: f64, longitudinal_angle: f64) -> Result<f64, Error> {
        if !(transverse_angle.is_finite() && longitudinal_angle.is_finite()) {
            return Err(Error::Validation(format!(
                "{}.angle_factor | Angles must be finite, got ({}, {})",
                self.dbgid, transverse_angle, longitudinal_angle
            )));
        }
        let depth = self.spec.depth();
        let transverse_ratio = (self.leg_spacing / depth).min(TRANSVERSE_RATIO_MAX);
        let longitudinal_ratio = (self.length / depth).min(LONGITUDINAL_RATIO_MAX);
        let transverse = self.transverse.get(transverse_angle, transverse_ratio);
        let longitudinal = self.longitudinal.get(longitudinal_angle, longitudinal_ratio);
        log::debug!(
            "{}.angle_factor | transverse({}°, {})={} longitudinal({}°, {})={}",
            self.dbgid,
            transverse_angle,
            transverse_ratio,
            transverse,
            longitudinal_angle,
            longitudinal_ratio,
            longitudinal
        );
        Ok(transverse * longitudinal)
    }
    pub fn size(&self) -> &str {
        &self.size
    }
    pub fn compound(&self) -> Compound {
        self.compound
    }
    ///
    /// Unit length, mm.
    pub fn length(&self) -> f64 {
        self.length
    }
    ///
    /// mm
    pub fn leg_spacing(&self) -> f64 {
        self.leg_spacing
    }
}
//
//
impl FenderModel for Mv {
    //
    fn name(&self) -> String {
        format!("{}-{}", self.size, self.compound)
    }
    //
    fn spec(&self) -> &FenderSpec {
        &self.spec
    }
    //
    fn velocity_factor(&self, velocity: f64) -> Result<f64, Error> {
        self.corrections
            .velocity_factor(Material::Blend, self.spec.depth(), velocity)
    }
    //
    fn temperature_factor(&self, temperature: f64) -> Result<f64, Error> {
        self.corrections.temperature_factor(Material::Blend, temperature)
    }
    ///
    /// - energy = angle factor * velocity factor * temperature factor (max temperature),
    /// - reaction = velocity factor * temperature factor (min temperature).
    fn capacity_factor(&self, event: &FenderEvent) -> Result<CapacityFactor, Error> {
        event.validate()?;
        let angle = self.angle_factor(event.berthing_angle, event.longitudinal_angle)?;
        let velocity = self.velocity_factor(event.velocity)?;
        let energy_temperature = self.temperature_factor(event.max_temperature)?;
        let reaction_temperature = self.temperature_factor(event.min_temperature)?;
        let factor = CapacityFactor::new(
            angle * velocity * energy_temperature,
            velocity * reaction_temperature,
        );
        log::debug!("{}.capacity_factor | {:?}", self.dbgid, factor);
        Ok(factor)
    }
}
