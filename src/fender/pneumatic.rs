//!
//! Floating pneumatic fender.
//
mod pressure_rating;
#[cfg(test)]
#[path = "../tests/fender/pneumatic_test.rs"]
mod tests;
//
pub use pressure_rating::PressureRating;
//
use super::{CapacityFactor, FenderEvent, FenderModel, FenderSpec, PerformanceCurve, Tolerance};
use crate::{catalog::PneumaticCatalog, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Pneumatic fender of the given size and initial pressure.
///
/// Angle, velocity and temperature corrections are not modeled.
#[derive(Clone)]
pub struct Pneumatic {
    dbgid: DbgId,
    size: String,
    pressure: PressureRating,
    spec: FenderSpec,
}
//
//
impl Pneumatic {
    ///
    /// Creates a new instance.
    ///
    /// - `size` - catalog size `<diameter>x<length>` in mm, e. g. `1700x3000`,
    ///   the leading digits are the depth.
    ///
    /// # Errors
    /// - [Error::Validation] returns if the size has no leading digits,
    /// - [Error::CatalogLookup] returns if the size is not rated for `pressure`.
    pub fn new(
        parent: &DbgId,
        catalog: &PneumaticCatalog,
        size: &str,
        pressure: PressureRating,
        tolerance: Tolerance,
    ) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, &format!("Pneumatic({}-{})", size, pressure));
        let depth = Self::depth_of(size)?;
        let (rated_energy, rated_reaction, rated_pressure) = catalog.rated(size, pressure)?;
        let curve = PerformanceCurve::new(
            vec![0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6],
            vec![0.0, 0.01, 0.02, 0.04, 0.07, 0.11, 0.17, 0.24, 0.33, 0.44, 0.59, 0.77, 1.0],
            vec![0.0, 0.03, 0.06, 0.1, 0.14, 0.19, 0.25, 0.32, 0.4, 0.51, 0.66, 0.82, 1.0],
            Some(vec![
                0.4, 0.405, 0.41, 0.42, 0.44, 0.46, 0.49, 0.54, 0.6, 0.67, 0.76, 0.81, 1.0,
            ]),
        )?;
        let spec = FenderSpec::new(
            depth,
            rated_energy,
            rated_reaction,
            Some(rated_pressure),
            tolerance,
            curve,
        )?;
        log::debug!(
            "{}.new | depth={} rated energy={} rated reaction={} rated pressure={}",
            dbgid,
            depth,
            rated_energy,
            rated_reaction,
            rated_pressure
        );
        Ok(Self {
            dbgid,
            size: size.to_owned(),
            pressure,
            spec,
        })
    }
    ///
    /// Returns the depth (mm) encoded by the leading digits of `size`.
    pub(crate) fn depth_of(size: &str) -> Result<f64, Error> {
        let size = size.trim();
        let digits = &size[..size.len() - size.trim_start_matches(|c: char| c.is_ascii_digit()).len()];
        digits.parse::<u32>().map(f64::from).map_err(|err| {
            Error::Validation(format!(
                "Pneumatic.depth_of | Size '{}' must start with the diameter in mm: {}",
                size, err
            ))
        })
    }
    pub fn size(&self) -> &str {
        &self.size
    }
    pub fn pressure(&self) -> PressureRating {
        self.pressure
    }
}
//
//
impl FenderModel for Pneumatic {
    //
    fn name(&self) -> String {
        format!("{}-{}", self.size, self.pressure)
    }
    //
    fn spec(&self) -> &FenderSpec {
        &self.spec
    }
    ///
    /// Returns `(1 - energy tolerance, 1 + reaction tolerance)`.
    fn capacity_factor(&self, event: &FenderEvent) -> Result<CapacityFactor, Error> {
        event.validate()?;
        let tolerance = self.spec.tolerance();
        let factor = CapacityFactor::new(1.0 - tolerance.energy(), 1.0 + tolerance.reaction());
        log::debug!("{}.capacity_factor | {:?}", self.dbgid, factor);
        Ok(factor)
    }
    ///
    /// Tolerances are already applied by the curve scaling, so the curve is not scaled further.
    fn curve_scalars(&self, event: &FenderEvent) -> Result<CapacityFactor, Error> {
        event.validate()?;
        Ok(CapacityFactor::default())
    }
}
