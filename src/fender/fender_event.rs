use crate::Error;
///
/// Conditions of a single fender compression.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FenderEvent {
    ///
    /// Berthing (transverse) angle, degrees.
    pub berthing_angle: f64,
    ///
    /// Longitudinal (bow flare) angle, degrees. Used by MV fenders only.
    pub longitudinal_angle: f64,
    ///
    /// Approach velocity, m/s.
    pub velocity: f64,
    ///
    /// Maximum design temperature, °C. Governs the energy factor.
    pub max_temperature: f64,
    ///
    /// Minimum design temperature, °C. Governs the reaction factor.
    pub min_temperature: f64,
}
//
//
impl FenderEvent {
    ///
    /// Creates a new instance.
    ///
    /// - `berthing_angle`, `longitudinal_angle` - degrees,
    /// - `velocity` - m/s,
    /// - `max_temperature`, `min_temperature` - °C.
    ///
    /// # Errors
    /// [Error::Validation] returns if the conditions are out of the domain, see [FenderEvent::validate].
    pub fn new(
        berthing_angle: f64,
        longitudinal_angle: f64,
        velocity: f64,
        max_temperature: f64,
        min_temperature: f64,
    ) -> Result<Self, Error> {
        let event = Self {
            berthing_angle,
            longitudinal_angle,
            velocity,
            max_temperature,
            min_temperature,
        };
        event.validate()?;
        Ok(event)
    }
    ///
    /// Checks the conditions.
    ///
    /// # Errors
    /// [Error::Validation] returns if an angle or a temperature is not finite,
    /// or the velocity is not positive.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, val) in [
            ("berthing angle", self.berthing_angle),
            ("longitudinal angle", self.longitudinal_angle),
            ("max temperature", self.max_temperature),
            ("min temperature", self.min_temperature),
        ] {
            if !val.is_finite() {
                return Err(Error::Validation(format!(
                    "FenderEvent.validate | The {} must be finite, got {}",
                    name, val
                )));
            }
        }
        if !(self.velocity.is_finite() && self.velocity > 0.0) {
            return Err(Error::Validation(format!(
                "FenderEvent.validate | Velocity must be positive, got {}",
                self.velocity
            )));
        }
        Ok(())
    }
}
//
//
impl Default for FenderEvent {
    fn default() -> Self {
        Self {
            berthing_angle: 0.0,
            longitudinal_angle: 0.0,
            velocity: 0.01,
            max_temperature: 23.0,
            min_temperature: 23.0,
        }
    }
}
///
/// Multipliers of the rated energy and reaction.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CapacityFactor {
    pub energy: f64,
    pub reaction: f64,
}
//
//
impl CapacityFactor {
    pub fn new(energy: f64, reaction: f64) -> Self {
        Self { energy, reaction }
    }
}
//
//
impl Default for CapacityFactor {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
