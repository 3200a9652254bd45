use crate::Error;
///
/// Vessel particulars used in the berthing energy calculation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VesselParticulars {
    ///
    /// Displacement in tonnes.
    pub displacement: f64,
    ///
    /// Length between perpendiculars in meters.
    pub lbp: f64,
    ///
    /// Beam in meters.
    pub beam: f64,
    ///
    /// Draft in meters.
    pub draft: f64,
    ///
    /// Under keel clearance in meters.
    pub ukc: f64,
}
//
//
impl VesselParticulars {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// [Error::Validation] returns if displacement, LBP, beam or draft is not positive,
    /// or UKC is negative.
    pub fn new(displacement: f64, lbp: f64, beam: f64, draft: f64, ukc: f64) -> Result<Self, Error> {
        let callee = "VesselParticulars.new";
        for (name, val) in [
            ("displacement", displacement),
            ("LBP", lbp),
            ("beam", beam),
            ("draft", draft),
        ] {
            if !(val.is_finite() && val > 0.0) {
                return Err(Error::Validation(format!(
                    "{} | {} must be positive, got {}",
                    callee, name, val
                )));
            }
        }
        if !(ukc.is_finite() && ukc >= 0.0) {
            return Err(Error::Validation(format!(
                "{} | UKC must not be negative, got {}",
                callee, ukc
            )));
        }
        Ok(Self {
            displacement,
            lbp,
            beam,
            draft,
            ukc,
        })
    }
}
