//!
//! Fender performance models.
//!
//! Every fender is built once from the [Catalog] rated values
//! and its normalized [PerformanceCurve], then evaluated for any number
//! of [FenderEvent]s through the [FenderModel] methods.
//
mod correction;
mod design_point;
mod fender_event;
mod fender_model;
mod fender_spec;
mod mv;
mod performance_curve;
mod pneumatic;
mod scn;
#[cfg(test)]
#[path = "tests/fender_test.rs"]
mod tests;
//
pub use correction::{compression_time, Corrections, K1, K2};
pub use design_point::DesignPoint;
pub use fender_event::{CapacityFactor, FenderEvent};
pub use fender_model::FenderModel;
pub use fender_spec::{FenderSpec, Tolerance};
pub use mv::{Compound, Mv};
pub use performance_curve::{AxisLimits, CurvePoint, PerformanceCurve, ScaledCurve, CHART_POINTS};
pub use pneumatic::{Pneumatic, PressureRating};
pub use scn::{Material, Scn};
//
use crate::{catalog::Catalog, Error};
use sal_sync::services::entity::dbg_id::DbgId;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
///
/// Supported fender types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, AsRefStr, Display)]
pub enum FenderKind {
    #[strum(serialize = "SCN")]
    Scn,
    #[strum(serialize = "MV")]
    Mv,
    Pneumatic,
}
//
//
impl FromStr for FenderKind {
    type Err = Error;
    //
    //
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        FenderKind::iter()
            .find(|kind| kind.as_ref().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                Error::UnknownMethod(format!("FenderKind.from_str | Unknown fender type '{}'", name))
            })
    }
}
///
/// [Fender] configuration.
///
/// Identifies the catalog entry and the variant-specific parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum FenderConf {
    Scn {
        size: String,
        grade: f64,
        material: Material,
    },
    Mv {
        size: String,
        compound: Compound,
        ///
        /// mm
        leg_spacing: f64,
    },
    Pneumatic {
        size: String,
        pressure: PressureRating,
    },
}
//
//
impl FenderConf {
    pub fn kind(&self) -> FenderKind {
        match self {
            FenderConf::Scn { .. } => FenderKind::Scn,
            FenderConf::Mv { .. } => FenderKind::Mv,
            FenderConf::Pneumatic { .. } => FenderKind::Pneumatic,
        }
    }
}
///
/// Any of the supported fenders.
#[derive(Clone)]
pub enum Fender {
    Scn(Scn),
    Mv(Mv),
    Pneumatic(Pneumatic),
}
//
//
impl Fender {
    ///
    /// Creates the fender configured by `conf` with rated values from the `catalog`.
    ///
    /// # Errors
    /// - [Error::Validation] returns if the configuration is out of the domain,
    /// - [Error::CatalogLookup] returns if the fender is not in the catalog.
    pub fn new(
        parent: &DbgId,
        catalog: &Catalog,
        conf: FenderConf,
        tolerance: Tolerance,
    ) -> Result<Self, Error> {
        let fender = match conf {
            FenderConf::Scn {
                size,
                grade,
                material,
            } => Fender::Scn(Scn::new(parent, &catalog.scn, &size, grade, material, tolerance)?),
            FenderConf::Mv {
                size,
                compound,
                leg_spacing,
            } => Fender::Mv(Mv::new(
                parent,
                &catalog.mv,
                &size,
                compound,
                leg_spacing,
                tolerance,
            )?),
            FenderConf::Pneumatic { size, pressure } => Fender::Pneumatic(Pneumatic::new(
                parent,
                &catalog.pneumatic,
                &size,
                pressure,
                tolerance,
            )?),
        };
        log::info!("{}/Fender.new | Created {}", parent, fender.name());
        Ok(fender)
    }
    pub fn kind(&self) -> FenderKind {
        match self {
            Fender::Scn(_) => FenderKind::Scn,
            Fender::Mv(_) => FenderKind::Mv,
            Fender::Pneumatic(_) => FenderKind::Pneumatic,
        }
    }
    //
    //
    fn model(&self) -> &dyn FenderModel {
        match self {
            Fender::Scn(fender) => fender,
            Fender::Mv(fender) => fender,
            Fender::Pneumatic(fender) => fender,
        }
    }
}
//
//
impl FenderModel for Fender {
    //
    fn name(&self) -> String {
        self.model().name()
    }
    //
    fn spec(&self) -> &FenderSpec {
        self.model().spec()
    }
    //
    fn capacity_factor(&self, event: &FenderEvent) -> Result<CapacityFactor, Error> {
        self.model().capacity_factor(event)
    }
    //
    fn curve_scalars(&self, event: &FenderEvent) -> Result<CapacityFactor, Error> {
        self.model().curve_scalars(event)
    }
    //
    fn velocity_factor(&self, velocity: f64) -> Result<f64, Error> {
        self.model().velocity_factor(velocity)
    }
    //
    fn temperature_factor(&self, temperature: f64) -> Result<f64, Error> {
        self.model().temperature_factor(temperature)
    }
}
