use crate::Error;
///
/// Designer supplied multipliers of the berthing energy.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BerthingCoefficients {
    ///
    /// Softness coefficient, Cs.
    pub softness: f64,
    ///
    /// Berth configuration coefficient, Cc.
    pub configuration: f64,
    ///
    /// Factor turning the normal berthing energy into the abnormal (design) one.
    pub abnormal: f64,
}
//
//
impl BerthingCoefficients {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if any of coefficients is not positive.
    pub fn new(softness: f64, configuration: f64, abnormal: f64) -> Result<Self, Error> {
        for (name, val) in [
            ("softness", softness),
            ("configuration", configuration),
            ("abnormal", abnormal),
        ] {
            if !(val.is_finite() && val > 0.0) {
                return Err(Error::Validation(format!(
                    "BerthingCoefficients.new | {} coefficient must be positive, got {}",
                    name, val
                )));
            }
        }
        Ok(Self {
            softness,
            configuration,
            abnormal,
        })
    }
}
//
//
impl Default for BerthingCoefficients {
    fn default() -> Self {
        Self {
            softness: 1.0,
            configuration: 1.0,
            abnormal: 1.0,
        }
    }
}
