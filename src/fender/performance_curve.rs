#[cfg(test)]
#[path = "../tests/fender/performance_curve_test.rs"]
mod tests;
//
use crate::{
    math::{
        interpolation::{interpolate, is_strictly_ascending, Spline},
        OwnedSet,
    },
    Error,
};
///
/// Number of the chart series points.
pub const CHART_POINTS: usize = 500;
///
/// Normalized fender performance.
///
/// Each control point maps the deflection fraction of the fender depth
/// to the energy, reaction and (optional) pressure fractions of the rated values.
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceCurve {
    deflection: OwnedSet<f64>,
    energy: OwnedSet<f64>,
    reaction: OwnedSet<f64>,
    pressure: Option<OwnedSet<f64>>,
}
//
//
impl PerformanceCurve {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if at least one of the statements is true:
    /// - there are less than two control points,
    /// - columns have different lengths,
    /// - deflection doesn't start at 0 or isn't strictly ascending,
    /// - energy isn't strictly ascending (required by the inverse lookup).
    pub fn new(
        deflection: Vec<f64>,
        energy: Vec<f64>,
        reaction: Vec<f64>,
        pressure: Option<Vec<f64>>,
    ) -> Result<Self, Error> {
        let callee = "PerformanceCurve.new";
        let len = deflection.len();
        if len < 2 {
            return Err(Error::Validation(format!(
                "{} | At least two control points required, got {}",
                callee, len
            )));
        }
        let pressure_len = pressure.as_ref().map_or(len, |vals| vals.len());
        if energy.len() != len || reaction.len() != len || pressure_len != len {
            return Err(Error::Validation(format!(
                "{} | Columns have different lengths: deflection={} energy={} reaction={} pressure={}",
                callee,
                len,
                energy.len(),
                reaction.len(),
                pressure_len
            )));
        }
        if deflection[0] != 0.0 || !is_strictly_ascending(&deflection) {
            return Err(Error::Validation(format!(
                "{} | Deflection must start at 0 and strictly increase, got {:?}",
                callee, deflection
            )));
        }
        if !is_strictly_ascending(&energy) {
            return Err(Error::Validation(format!(
                "{} | Energy must strictly increase, got {:?}",
                callee, energy
            )));
        }
        Ok(Self {
            deflection: deflection.into(),
            energy: energy.into(),
            reaction: reaction.into(),
            pressure: pressure.map(OwnedSet::from),
        })
    }
    ///
    /// Returns the curve with each column multiplied by the corresponding scale.
    ///
    /// `pressure` scale is ignored if the curve has no pressure column.
    pub fn scaled(&self, deflection: f64, energy: f64, reaction: f64, pressure: f64) -> ScaledCurve {
        let scale = |vals: &[f64], scale: f64| -> OwnedSet<f64> {
            vals.iter().map(|val| val * scale).collect()
        };
        ScaledCurve {
            deflection: scale(&self.deflection[..], deflection),
            energy: scale(&self.energy[..], energy),
            reaction: scale(&self.reaction[..], reaction),
            pressure: self.pressure.as_ref().map(|vals| scale(&vals[..], pressure)),
        }
    }
    ///
    /// Returns `true` if the curve has the pressure column.
    pub fn has_pressure(&self) -> bool {
        self.pressure.is_some()
    }
    ///
    /// Returns the deflection fractions.
    pub fn deflection(&self) -> &[f64] {
        &self.deflection
    }
    ///
    /// Returns the energy fractions.
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }
    ///
    /// Returns the reaction fractions.
    pub fn reaction(&self) -> &[f64] {
        &self.reaction
    }
}
///
/// Single point of the [ScaledCurve].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    ///
    /// mm
    pub deflection: f64,
    ///
    /// kNm
    pub energy: f64,
    ///
    /// kN
    pub reaction: f64,
    ///
    /// kPa
    pub pressure: Option<f64>,
}
///
/// Axis limits for plotting the [ScaledCurve].
///
/// Values are rounded up to a multiple of 100 if they are >= 1000,
/// to a multiple of 25 otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub deflection: f64,
    pub energy: f64,
    pub reaction: f64,
    pub pressure: Option<f64>,
}
///
/// Fender performance in physical units: deflection (mm),
/// energy (kNm), reaction (kN) and optional hull pressure (kPa).
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledCurve {
    deflection: OwnedSet<f64>,
    energy: OwnedSet<f64>,
    reaction: OwnedSet<f64>,
    pressure: Option<OwnedSet<f64>>,
}
//
//
impl ScaledCurve {
    ///
    /// Returns the deflection at which the fender absorbs `energy`.
    ///
    /// Energies outside of the curve are clamped to its first or last deflection.
    pub fn deflection_at(&self, energy: f64) -> f64 {
        interpolate(energy, &self.energy, &self.deflection, None)
    }
    ///
    /// Returns the absorbed energy at `deflection`.
    pub fn energy_at(&self, deflection: f64) -> f64 {
        interpolate(deflection, &self.deflection, &self.energy, None)
    }
    ///
    /// Returns the reaction at `deflection`.
    pub fn reaction_at(&self, deflection: f64) -> f64 {
        interpolate(deflection, &self.deflection, &self.reaction, None)
    }
    ///
    /// Returns the hull pressure at `deflection`, if the curve has the pressure column.
    pub fn pressure_at(&self, deflection: f64) -> Option<f64> {
        self.pressure
            .as_ref()
            .map(|pressure| interpolate(deflection, &self.deflection, pressure, None))
    }
    ///
    /// Returns control points of the curve.
    pub fn points(&self) -> Vec<CurvePoint> {
        (0..self.deflection.len())
            .map(|id| CurvePoint {
                deflection: self.deflection[id],
                energy: self.energy[id],
                reaction: self.reaction[id],
                pressure: self.pressure.as_ref().map(|pressure| pressure[id]),
            })
            .collect()
    }
    ///
    /// Returns the curve resampled to `len` (at least 2)
    /// evenly spaced deflections from 0 to the maximum deflection.
    ///
    /// Each column is interpolated by the not-a-knot cubic [Spline]
    /// through the control points, so the series is smooth for charting.
    ///
    /// # Errors
    /// [Error::Validation] returns if the deflections are not strictly ascending.
    pub fn resample(&self, len: usize) -> Result<Self, Error> {
        let len = len.max(2);
        let max = self.deflection[self.deflection.len() - 1];
        let deflection: OwnedSet<f64> = (0..len)
            .map(|id| max * id as f64 / (len - 1) as f64)
            .collect();
        let column = |vals: &[f64]| -> Result<OwnedSet<f64>, Error> {
            let spline = Spline::new(&self.deflection, vals)?;
            Ok(deflection.iter().map(|x| spline.get(*x)).collect())
        };
        Ok(Self {
            energy: column(&self.energy[..])?,
            reaction: column(&self.reaction[..])?,
            pressure: match &self.pressure {
                Some(vals) => Some(column(&vals[..])?),
                None => None,
            },
            deflection,
        })
    }
    ///
    /// Returns rounded up axis limits of the chart series
    /// resampled to [CHART_POINTS] points.
    ///
    /// Maximums are taken from the series,
    /// so the overshoot of the spline between control points is covered.
    ///
    /// # Errors
    /// [Error::Validation] returns if the curve can't be resampled.
    pub fn axis_limits(&self) -> Result<AxisLimits, Error> {
        let series = self.resample(CHART_POINTS)?;
        let max = |vals: &[f64]| vals.iter().copied().fold(0.0, f64::max);
        let round_up = |val: f64| {
            let step = if val >= 1000.0 { 100.0 } else { 25.0 };
            (val / step).ceil() * step
        };
        Ok(AxisLimits {
            deflection: max(&series.deflection[..]),
            energy: round_up(max(&series.energy[..])),
            reaction: round_up(max(&series.reaction[..])),
            pressure: series.pressure.as_ref().map(|vals| round_up(max(&vals[..]))),
        })
    }
    ///
    /// Returns deflections, mm.
    pub fn deflection(&self) -> &[f64] {
        &self.deflection
    }
    ///
    /// Returns energies, kNm.
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }
    ///
    /// Returns reactions, kN.
    pub fn reaction(&self) -> &[f64] {
        &self.reaction
    }
    ///
    /// Returns hull pressures, kPa.
    pub fn pressure(&self) -> Option<&[f64]> {
        self.pressure.as_deref()
    }
}
