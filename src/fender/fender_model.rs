use super::{CapacityFactor, DesignPoint, FenderEvent, FenderSpec, PerformanceCurve, ScaledCurve, Tolerance};
use crate::Error;
///
/// Fender performance under the design conditions.
///
/// Implementors provide the rated data ([FenderModel::spec])
/// and the variant-specific [FenderModel::capacity_factor],
/// the rest is derived from them.
/// Implementors are immutable, every method takes `&self`.
pub trait FenderModel {
    ///
    /// Identifier of the fender, e. g. `SCN1050-F1.1`.
    fn name(&self) -> String;
    ///
    /// Rated data of the fender.
    fn spec(&self) -> &FenderSpec;
    ///
    /// Multipliers of the rated energy and reaction under the `event` conditions.
    fn capacity_factor(&self, event: &FenderEvent) -> Result<CapacityFactor, Error>;
    ///
    /// Scalars applied to the performance curve by [FenderModel::evaluate].
    fn curve_scalars(&self, event: &FenderEvent) -> Result<CapacityFactor, Error> {
        self.capacity_factor(event)
    }
    ///
    /// Returns the velocity factor at `velocity`, m/s.
    fn velocity_factor(&self, _velocity: f64) -> Result<f64, Error> {
        Ok(1.0)
    }
    ///
    /// Returns the temperature factor at `temperature`, °C.
    fn temperature_factor(&self, _temperature: f64) -> Result<f64, Error> {
        Ok(1.0)
    }
    ///
    /// mm
    fn depth(&self) -> f64 {
        self.spec().depth()
    }
    ///
    /// kNm
    fn rated_energy(&self) -> f64 {
        self.spec().rated_energy()
    }
    ///
    /// kN
    fn rated_reaction(&self) -> f64 {
        self.spec().rated_reaction()
    }
    fn tolerance(&self) -> Tolerance {
        self.spec().tolerance()
    }
    fn performance_curve(&self) -> &PerformanceCurve {
        self.spec().curve()
    }
    ///
    /// Returns the performance curve in physical units scaled by `scalars`.
    fn scaled_curve(&self, scalars: CapacityFactor) -> Result<ScaledCurve, Error> {
        self.spec().scaled_curve(scalars)
    }
    ///
    /// Returns the operating point absorbing `design_energy` (kNm)
    /// on the curve scaled by `scalars`.
    ///
    /// Energies beyond the curve are clamped to its last point,
    /// [DesignPoint::capacity_exceeded] is set in that case.
    fn design_point(&self, design_energy: f64, scalars: CapacityFactor) -> Result<DesignPoint, Error> {
        if !design_energy.is_finite() || design_energy < 0.0 {
            return Err(Error::Validation(format!(
                "{}.design_point | Design energy must be non-negative, got {}",
                self.name(),
                design_energy
            )));
        }
        let curve = self.scaled_curve(scalars)?;
        let deflection = curve.deflection_at(design_energy);
        let reaction = curve.reaction_at(deflection);
        let pressure = curve.pressure_at(deflection);
        let capacity = self.spec().corrected_energy(scalars.energy);
        let capacity_exceeded = design_energy > capacity;
        if capacity_exceeded {
            log::warn!(
                "{}.design_point | Design energy {:.1}kNm exceeds the capacity {:.1}kNm",
                self.name(),
                design_energy,
                capacity
            );
        }
        log::debug!(
            "{}.design_point | energy={} deflection={} reaction={} pressure={:?}",
            self.name(),
            design_energy,
            deflection,
            reaction,
            pressure
        );
        Ok(DesignPoint {
            design_energy,
            deflection,
            reaction,
            pressure,
            capacity,
            capacity_exceeded,
            curve,
        })
    }
    ///
    /// Returns the operating point absorbing `design_energy` (kNm)
    /// under the `event` conditions.
    fn evaluate(&self, event: &FenderEvent, design_energy: f64) -> Result<DesignPoint, Error> {
        let scalars = self.curve_scalars(event)?;
        self.design_point(design_energy, scalars)
    }
}
