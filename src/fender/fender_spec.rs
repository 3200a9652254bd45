use super::{CapacityFactor, PerformanceCurve, ScaledCurve};
use crate::Error;
///
/// Manufacturing tolerances of the rated values, fractions in [0, 1).
///
/// The energy tolerance reduces the rated energy,
/// the reaction tolerance increases the rated reaction.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Tolerance {
    energy: f64,
    reaction: f64,
}
//
//
impl Tolerance {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if a tolerance is outside of [0, 1).
    pub fn new(energy: f64, reaction: f64) -> Result<Self, Error> {
        for (name, val) in [("energy", energy), ("reaction", reaction)] {
            if !(0.0..1.0).contains(&val) {
                return Err(Error::Validation(format!(
                    "Tolerance.new | The {} tolerance must be in [0, 1), got {}",
                    name, val
                )));
            }
        }
        Ok(Self { energy, reaction })
    }
    ///
    /// Creates a new instance with the same energy and reaction tolerance.
    pub fn symmetric(tolerance: f64) -> Result<Self, Error> {
        Self::new(tolerance, tolerance)
    }
    pub fn energy(&self) -> f64 {
        self.energy
    }
    pub fn reaction(&self) -> f64 {
        self.reaction
    }
}
///
/// Rated data of a single fender instance, immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct FenderSpec {
    depth: f64,
    rated_energy: f64,
    rated_reaction: f64,
    rated_pressure: Option<f64>,
    tolerance: Tolerance,
    curve: PerformanceCurve,
}
//
//
impl FenderSpec {
    ///
    /// Creates a new instance.
    ///
    /// - `depth` - mm,
    /// - `rated_energy` - kNm,
    /// - `rated_reaction` - kN,
    /// - `rated_pressure` - kPa, required if `curve` has the pressure column.
    ///
    /// # Errors
    /// [Error::Validation] returns if depth or any of rated values is not positive,
    /// or the rated pressure doesn't match the curve.
    pub fn new(
        depth: f64,
        rated_energy: f64,
        rated_reaction: f64,
        rated_pressure: Option<f64>,
        tolerance: Tolerance,
        curve: PerformanceCurve,
    ) -> Result<Self, Error> {
        let callee = "FenderSpec.new";
        for (name, val) in [
            ("depth", depth),
            ("rated energy", rated_energy),
            ("rated reaction", rated_reaction),
            ("rated pressure", rated_pressure.unwrap_or(1.0)),
        ] {
            if !(val.is_finite() && val > 0.0) {
                return Err(Error::Validation(format!(
                    "{} | The {} must be positive, got {}",
                    callee, name, val
                )));
            }
        }
        if rated_pressure.is_some() != curve.has_pressure() {
            return Err(Error::Validation(format!(
                "{} | Rated pressure {:?} doesn't match the curve pressure column presence ({})",
                callee,
                rated_pressure,
                curve.has_pressure()
            )));
        }
        Ok(Self {
            depth,
            rated_energy,
            rated_reaction,
            rated_pressure,
            tolerance,
            curve,
        })
    }
    ///
    /// Returns the curve in physical units:
    /// - deflection * `depth`,
    /// - energy * `rated_energy * (1 - energy tolerance) * scalars.energy`,
    /// - reaction * `rated_reaction * (1 + reaction tolerance) * scalars.reaction`,
    /// - pressure * `rated_pressure`.
    ///
    /// # Errors
    /// [Error::Validation] returns if a scalar is not positive.
    pub fn scaled_curve(&self, scalars: CapacityFactor) -> Result<ScaledCurve, Error> {
        if !(scalars.energy.is_finite() && scalars.energy > 0.0)
            || !(scalars.reaction.is_finite() && scalars.reaction > 0.0)
        {
            return Err(Error::Validation(format!(
                "FenderSpec.scaled_curve | Scalars must be positive, got {:?}",
                scalars
            )));
        }
        Ok(self.curve.scaled(
            self.depth,
            self.corrected_energy(scalars.energy),
            self.rated_reaction * (1.0 + self.tolerance.reaction) * scalars.reaction,
            self.rated_pressure.unwrap_or(1.0),
        ))
    }
    ///
    /// Returns the rated energy reduced by the tolerance and multiplied by `scalar`, kNm.
    pub fn corrected_energy(&self, scalar: f64) -> f64 {
        self.rated_energy * (1.0 - self.tolerance.energy) * scalar
    }
    pub fn depth(&self) -> f64 {
        self.depth
    }
    pub fn rated_energy(&self) -> f64 {
        self.rated_energy
    }
    pub fn rated_reaction(&self) -> f64 {
        self.rated_reaction
    }
    pub fn rated_pressure(&self) -> Option<f64> {
        self.rated_pressure
    }
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
    pub fn curve(&self) -> &PerformanceCurve {
        &self.curve
    }
}
