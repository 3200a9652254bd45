use crate::Error;
use strum_macros::{AsRefStr, Display, EnumIter};
///
/// Named berthing point locations.
///
/// The fraction is of LBP and measured as [BerthingEvent::berthing_point].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, AsRefStr, Display)]
pub enum BerthingPoint {
    #[strum(serialize = "1/6 point")]
    Sixth,
    #[strum(serialize = "1/5 point")]
    Fifth,
    #[strum(serialize = "1/4 point")]
    Quarter,
    #[strum(serialize = "1/3 point")]
    Third,
}
//
//
impl BerthingPoint {
    ///
    /// Returns the berthing point as a fraction of LBP.
    pub fn fraction(&self) -> f64 {
        match self {
            BerthingPoint::Sixth => 0.333,
            BerthingPoint::Fifth => 0.3,
            BerthingPoint::Quarter => 0.25,
            BerthingPoint::Third => 0.1667,
        }
    }
}
///
/// Parameters of a single berthing event.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BerthingEvent {
    ///
    /// Approach velocity in m/s.
    pub velocity: f64,
    ///
    /// Berthing angle in degrees.
    pub berthing_angle: f64,
    ///
    /// Velocity angle in degrees.
    pub velocity_angle: f64,
    ///
    /// Berthing point as a fraction of LBP, in (0, 0.5).
    ///
    /// The distance from the center of mass to the berthing point
    /// along the hull is `(0.5 - berthing_point) * LBP`.
    pub berthing_point: f64,
}
//
//
impl BerthingEvent {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if the velocity is negative
    /// or the berthing point is outside of (0, 0.5).
    pub fn new(
        velocity: f64,
        berthing_angle: f64,
        velocity_angle: f64,
        berthing_point: f64,
    ) -> Result<Self, Error> {
        let callee = "BerthingEvent.new";
        if !(velocity.is_finite() && velocity >= 0.0) {
            return Err(Error::Validation(format!(
                "{} | Velocity must not be negative, got {}",
                callee, velocity
            )));
        }
        if !(berthing_angle.is_finite() && velocity_angle.is_finite()) {
            return Err(Error::Validation(format!(
                "{} | Angles must be finite, got berthing_angle={} velocity_angle={}",
                callee, berthing_angle, velocity_angle
            )));
        }
        if !(berthing_point > 0.0 && berthing_point < 0.5) {
            return Err(Error::Validation(format!(
                "{} | Berthing point must be a fraction of LBP in (0, 0.5), got {}",
                callee, berthing_point
            )));
        }
        Ok(Self {
            velocity,
            berthing_angle,
            velocity_angle,
            berthing_point,
        })
    }
    ///
    /// Creates a new instance located at the named berthing point.
    pub fn at(
        velocity: f64,
        berthing_angle: f64,
        velocity_angle: f64,
        point: BerthingPoint,
    ) -> Result<Self, Error> {
        Self::new(velocity, berthing_angle, velocity_angle, point.fraction())
    }
}
