//!
//! Kinetic energy of a berthing vessel transmitted into the fender.
//!
//! `E = 0.5 * displacement * Cm * Ce * Cs * Cc * (v * cos(velocity_angle))^2`
//!
//! where
//! - Cb - [block_coefficient],
//! - Ce - [eccentricity_coefficient],
//! - Cm - [mass_coefficient],
//! - Cs, Cc - [BerthingCoefficients] supplied by the designer.
//
mod berthing_coefficients;
mod berthing_energy;
mod berthing_event;
mod mass_method;
mod vessel_particulars;
#[cfg(test)]
#[path = "tests/berthing_test.rs"]
mod tests;
//
pub use berthing_coefficients::BerthingCoefficients;
pub use berthing_energy::BerthingEnergy;
pub use berthing_event::{BerthingEvent, BerthingPoint};
pub use mass_method::MassMethod;
pub use vessel_particulars::VesselParticulars;
//
use crate::Error;
use std::f64::consts::{FRAC_PI_2, PI};
///
/// Sea water density, t/m3.
pub const SEA_WATER_DENSITY: f64 = 1.025;
///
/// Returns the block coefficient Cb of the vessel.
///
/// # Errors
/// [Error::NumericDomain] returns if the denominator is zero.
pub fn block_coefficient(displacement: f64, lbp: f64, beam: f64, draft: f64) -> Result<f64, Error> {
    let volume = SEA_WATER_DENSITY * lbp * beam * draft;
    if volume == 0.0 {
        return Err(Error::NumericDomain(format!(
            "block_coefficient | Zero denominator: LBP={} beam={} draft={}",
            lbp, beam, draft
        )));
    }
    Ok(displacement / volume)
}
///
/// Returns the radius of gyration K of the vessel, m.
pub fn radius_of_gyration(cb: f64, lbp: f64) -> f64 {
    (0.19 * cb + 0.11) * lbp
}
///
/// Returns the distance R from the center of mass to the berthing point, m.
///
/// - `berthing_point` - fraction of LBP (see [BerthingEvent::berthing_point]).
pub fn lever_arm(lbp: f64, beam: f64, berthing_point: f64) -> f64 {
    ((0.5 - berthing_point) * lbp).hypot(0.5 * beam)
}
///
/// Returns the angle between the velocity vector and the line
/// from the center of mass to the berthing point, radians.
///
/// - `berthing_angle`, `velocity_angle` - radians.
///
/// # Errors
/// [Error::NumericDomain] returns if `0.5 * beam / lever_arm` is outside of [-1, 1].
pub fn gamma(beam: f64, lever_arm: f64, berthing_angle: f64, velocity_angle: f64) -> Result<f64, Error> {
    let sin = 0.5 * beam / lever_arm;
    if !(-1.0..=1.0).contains(&sin) {
        return Err(Error::NumericDomain(format!(
            "gamma | arcsin argument 0.5 * beam / R = {} is outside of [-1, 1], beam={} R={}",
            sin, beam, lever_arm
        )));
    }
    Ok(FRAC_PI_2 - berthing_angle - sin.asin() - velocity_angle)
}
///
/// Returns the eccentricity coefficient Ce.
///
/// - `berthing_point` - fraction of LBP (see [BerthingEvent::berthing_point]),
/// - `berthing_angle`, `velocity_angle` - radians.
///
/// # Errors
/// [Error::NumericDomain] returns if the arcsin argument is outside of [-1, 1]
/// or the denominator is zero.
pub fn eccentricity_coefficient(
    cb: f64,
    lbp: f64,
    beam: f64,
    berthing_point: f64,
    berthing_angle: f64,
    velocity_angle: f64,
) -> Result<f64, Error> {
    let k = radius_of_gyration(cb, lbp);
    let r = lever_arm(lbp, beam, berthing_point);
    let gamma = gamma(beam, r, berthing_angle, velocity_angle)?;
    eccentricity(k, r, gamma)
}
///
/// Returns the eccentricity coefficient Ce
/// from the radius of gyration `k`, the lever arm `r` (m) and `gamma` (radians).
///
/// # Errors
/// [Error::NumericDomain] returns if both `k` and `r` are zero.
pub fn eccentricity(k: f64, r: f64, gamma: f64) -> Result<f64, Error> {
    let denominator = k.powi(2) + r.powi(2);
    if denominator == 0.0 {
        return Err(Error::NumericDomain(format!(
            "eccentricity | Zero denominator: K={} R={}",
            k, r
        )));
    }
    Ok((k.powi(2) + (r * gamma.cos()).powi(2)) / denominator)
}
///
/// Returns the added-mass coefficient Cm calculated by `method`.
///
/// # Errors
/// [Error::NumericDomain] returns if the denominator of the selected method is zero.
pub fn mass_coefficient(
    draft: f64,
    ukc: f64,
    beam: f64,
    cb: f64,
    method: MassMethod,
) -> Result<f64, Error> {
    let denominator = match method {
        MassMethod::Pianc => draft,
        MassMethod::Shigeru => 2.0 * beam * cb,
        MassMethod::VascoCosta => beam,
    };
    if denominator == 0.0 {
        return Err(Error::NumericDomain(format!(
            "mass_coefficient | Zero denominator for '{}' method: draft={} beam={} Cb={}",
            method, draft, beam, cb
        )));
    }
    Ok(match method {
        MassMethod::Pianc => (1.875 - 0.75 * ukc / draft).clamp(1.5, 1.8),
        MassMethod::Shigeru => 1.0 + PI * draft / denominator,
        MassMethod::VascoCosta => 1.0 + 2.0 * draft / denominator,
    })
}
///
/// Returns the berthing energy of the `vessel` for the `event`.
///
/// Angles of the `event` are in degrees.
///
/// # Errors
/// [Error::NumericDomain] returns if any coefficient can't be calculated.
pub fn berthing_energy(
    vessel: &VesselParticulars,
    event: &BerthingEvent,
    coefficients: &BerthingCoefficients,
    method: MassMethod,
) -> Result<BerthingEnergy, Error> {
    let callee = "berthing_energy";
    let berthing_angle = event.berthing_angle.to_radians();
    let velocity_angle = event.velocity_angle.to_radians();
    let cb = block_coefficient(vessel.displacement, vessel.lbp, vessel.beam, vessel.draft)?;
    let k = radius_of_gyration(cb, vessel.lbp);
    let r = lever_arm(vessel.lbp, vessel.beam, event.berthing_point);
    let gamma = gamma(vessel.beam, r, berthing_angle, velocity_angle)?;
    let ce = eccentricity(k, r, gamma)?;
    let cm = mass_coefficient(vessel.draft, vessel.ukc, vessel.beam, cb, method)?;
    let cs = coefficients.softness;
    let cc = coefficients.configuration;
    let energy =
        0.5 * vessel.displacement * cm * ce * cs * cc * (event.velocity * velocity_angle.cos()).powi(2);
    let mut warnings = vec![];
    if method == MassMethod::VascoCosta
        && (event.velocity < 0.08 || vessel.ukc < 0.1 * vessel.draft)
    {
        let warning = "Vasco Costa is valid for UKC >= 0.1 * draft and berthing velocity >= 0.08 m/s".to_owned();
        log::warn!("{} | {}", callee, warning);
        warnings.push(warning);
    }
    log::debug!(
        "{} | Cb={} K={} R={} gamma={} Ce={} Cm={} Cs={} Cc={} energy={}",
        callee,
        cb,
        k,
        r,
        gamma,
        ce,
        cm,
        cs,
        cc,
        energy
    );
    Ok(BerthingEnergy {
        energy,
        design_energy: energy * coefficients.abnormal,
        block: cb,
        radius_of_gyration: k,
        gamma,
        eccentricity: ce,
        mass: cm,
        mass_method: method,
        softness: cs,
        configuration: cc,
        abnormal: coefficients.abnormal,
        warnings,
    })
}
