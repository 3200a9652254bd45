//!
//! Environmental correction of the rubber fender performance.
//!
//! Temperature and velocity factor tables are shared by rubber fenders,
//! the value column is selected by [Material].
//
use super::Material;
use crate::{math::interpolation::Table, Error};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Constants converting the approach velocity into the compression time:
/// `t = depth * K1 / (K2 * velocity * 1000)`.
pub const K1: f64 = 0.72;
pub const K2: f64 = 0.74;
///
/// Returns the compression time in seconds.
///
/// - `depth` - fender depth in mm,
/// - `velocity` - approach velocity in m/s.
///
/// # Errors
/// [Error::Validation] returns if `velocity` is not positive.
pub fn compression_time(depth: f64, velocity: f64) -> Result<f64, Error> {
    if !(velocity.is_finite() && velocity > 0.0) {
        return Err(Error::Validation(format!(
            "compression_time | Velocity must be positive, got {}",
            velocity
        )));
    }
    Ok(depth * K1 / (K2 * velocity * 1000.0))
}
///
/// Temperature and velocity factor tables.
#[derive(Clone)]
pub struct Corrections {
    dbgid: DbgId,
    temperature: Table,
    velocity: Table,
}
//
//
impl Corrections {
    ///
    /// Returns tables of the standard rubber compounds,
    /// one column per [Material].
    pub fn standard(parent: &DbgId) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "Corrections");
        let temperature = Table::new(
            &dbgid,
            vec![-30.0, -20.0, -10.0, 0.0, 10.0, 23.0, 30.0, 40.0, 50.0],
            [
                vec![1.540, 1.249, 1.130, 1.075, 1.030, 1.000, 0.978, 0.947, 0.916],
                vec![1.315, 1.142, 1.080, 1.053, 1.025, 1.000, 0.978, 0.946, 0.914],
                vec![1.877, 1.410, 1.206, 1.108, 1.038, 1.000, 0.979, 0.948, 0.918],
            ],
        )?;
        let velocity = Table::new(
            &dbgid,
            (1..=20).map(|t| t as f64).collect::<Vec<_>>(),
            [
                vec![
                    1.20, 1.16, 1.14, 1.13, 1.11, 1.10, 1.09, 1.09, 1.08, 1.07, 1.07, 1.06, 1.06,
                    1.05, 1.05, 1.05, 1.04, 1.04, 1.04, 1.03,
                ],
                vec![
                    1.14, 1.10, 1.09, 1.07, 1.06, 1.06, 1.05, 1.04, 1.04, 1.03, 1.03, 1.02, 1.02,
                    1.02, 1.01, 1.01, 1.01, 1.01, 1.00, 1.00,
                ],
                vec![
                    1.31, 1.25, 1.22, 1.20, 1.19, 1.17, 1.16, 1.15, 1.14, 1.14, 1.13, 1.12, 1.12,
                    1.11, 1.11, 1.10, 1.10, 1.09, 1.09, 1.08,
                ],
            ],
        )?;
        Ok(Self {
            dbgid,
            temperature,
            velocity,
        })
    }
    ///
    /// Returns the velocity factor of a fender with `depth` (mm)
    /// compressed at `velocity` (m/s).
    ///
    /// Compression times longer than the table covers give 1.0.
    pub fn velocity_factor(&self, material: Material, depth: f64, velocity: f64) -> Result<f64, Error> {
        let time = compression_time(depth, velocity)?;
        let factor = self.velocity.try_get(material.column(), time, Some(1.0))?;
        log::debug!(
            "{}.velocity_factor | material={} depth={} velocity={} time={} factor={}",
            self.dbgid,
            material,
            depth,
            velocity,
            time,
            factor
        );
        Ok(factor)
    }
    ///
    /// Returns the temperature factor at `temperature` (°C).
    ///
    /// Temperatures above the table cover give 1.0.
    ///
    /// # Errors
    /// [Error::Validation] returns if `temperature` is not finite.
    pub fn temperature_factor(&self, material: Material, temperature: f64) -> Result<f64, Error> {
        if !temperature.is_finite() {
            return Err(Error::Validation(format!(
                "{}.temperature_factor | Temperature must be finite, got {}",
                self.dbgid, temperature
            )));
        }
        let factor = self
            .temperature
            .try_get(material.column(), temperature, Some(1.0))?;
        log::debug!(
            "{}.temperature_factor | material={} temperature={} factor={}",
            self.dbgid,
            material,
            temperature,
            factor
        );
        Ok(factor)
    }
}
