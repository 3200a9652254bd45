use super::MassMethod;
///
/// Result of the berthing energy calculation with all intermediate coefficients.
///
/// [std::fmt::Display] gives the full diagnostic breakdown.
#[derive(Clone, PartialEq, Debug)]
pub struct BerthingEnergy {
    ///
    /// Normal berthing energy in kNm.
    pub energy: f64,
    ///
    /// Normal berthing energy multiplied by the abnormal factor, kNm.
    pub design_energy: f64,
    ///
    /// Block coefficient, Cb.
    pub block: f64,
    ///
    /// Radius of gyration K in meters.
    pub radius_of_gyration: f64,
    ///
    /// Angle between the velocity vector and the line
    /// from the center of mass to the berthing point, radians.
    pub gamma: f64,
    ///
    /// Eccentricity coefficient, Ce.
    pub eccentricity: f64,
    ///
    /// Added-mass coefficient, Cm.
    pub mass: f64,
    pub mass_method: MassMethod,
    pub softness: f64,
    pub configuration: f64,
    pub abnormal: f64,
    ///
    /// Messages about the method applicability.
    pub warnings: Vec<String>,
}
//
//
impl std::fmt::Display for BerthingEnergy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Calculation out:")?;
        writeln!(f, "\tBerthing energy: {:.2}kNm", self.energy)?;
        writeln!(f, "\tAbnormal energy: {:.2}kNm", self.design_energy)?;
        writeln!(f, "\tBlock coefficient [Cb]: {:.2}", self.block)?;
        writeln!(f, "\tK factor [K]: {:.2}", self.radius_of_gyration)?;
        writeln!(f, "\tGamma angle [gamma]: {:.2}", self.gamma.to_degrees())?;
        writeln!(f, "\tEccentricity coefficient [Ce]: {:.2}", self.eccentricity)?;
        writeln!(
            f,
            "\tMass coefficient [Cm] ({}): {:.2}",
            self.mass_method, self.mass
        )?;
        writeln!(f, "\tSoftness coefficient [Cs]: {:.2}", self.softness)?;
        writeln!(f, "\tConfiguration coefficient [Cc]: {:.2}", self.configuration)?;
        write!(f, "\tAbnormal factor: {:.2}", self.abnormal)?;
        for warning in &self.warnings {
            write!(f, "\n\tWarning: {}", warning)?;
        }
        Ok(())
    }
}
