use super::ScaledCurve;
///
/// Operating point of the fender absorbing the design energy.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignPoint {
    ///
    /// kNm
    pub design_energy: f64,
    ///
    /// mm
    pub deflection: f64,
    ///
    /// kN
    pub reaction: f64,
    ///
    /// kPa, pneumatic fenders only.
    pub pressure: Option<f64>,
    ///
    /// Rated energy corrected by the tolerance and the energy factor, kNm.
    pub capacity: f64,
    ///
    /// `true` if the design energy exceeds the corrected rated energy.
    pub capacity_exceeded: bool,
    ///
    /// Curve the point was derived from.
    pub curve: ScaledCurve,
}
