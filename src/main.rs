use fender_design::{
    berthing::{berthing_energy, BerthingCoefficients, BerthingEvent, BerthingPoint, MassMethod, VesselParticulars},
    catalog::{Catalog, CatalogConf},
    fender::{Fender, FenderConf, FenderEvent, FenderModel, Material, Tolerance},
    selection::{recommend, Demand, Request},
    Error,
};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Demo driver.
///
/// Usage: `fender-design <catalog dir> <SCN grade>...`,
/// the grades are listed in the order of the SCN table columns.
fn main() {
    env_logger::init();
    let dbgid = DbgId("fender-design".to_owned());
    let mut args = std::env::args().skip(1);
    let dir = args.next().unwrap_or_else(|| "catalog".to_owned());
    let grades: Result<Vec<f64>, _> = args.map(|arg| arg.parse::<f64>()).collect();
    let grades = match grades {
        Ok(grades) => grades,
        Err(err) => {
            log::error!("{}.main | Invalid SCN grade: {}", dbgid, err);
            std::process::exit(2);
        }
    };
    if let Err(err) = run(&dbgid, &dir, grades) {
        log::error!("{}.main | {}", dbgid, err);
        std::process::exit(1);
    }
}
//
//
fn run(dbgid: &DbgId, dir: &str, grades: Vec<f64>) -> Result<(), Error> {
    let vessel = VesselParticulars::new(39_000.0, 170.0, 26.4, 10.9, 3.0)?;
    let event = BerthingEvent::at(0.1, 5.0, 0.0, BerthingPoint::Quarter)?;
    let energy = berthing_energy(
        &vessel,
        &event,
        &BerthingCoefficients::new(1.0, 1.0, 1.75)?,
        MassMethod::Pianc,
    )?;
    log::info!("{}.run | {}", dbgid, energy);
    let catalog = Catalog::load(dbgid, &CatalogConf::with_dir(dir, grades))?;
    let tolerance = Tolerance::symmetric(0.1)?;
    let fender_event = FenderEvent::new(5.0, 0.0, event.velocity, 23.0, 23.0)?;
    let probe = Fender::new(
        dbgid,
        &catalog,
        FenderConf::Scn {
            size: "SCN1050".to_owned(),
            grade: 1.1,
            material: Material::Blend,
        },
        tolerance,
    )?;
    let factor = probe.capacity_factor(&fender_event)?;
    let demand = Demand::new(energy.design_energy, factor.energy, tolerance.energy())?;
    match recommend(&catalog, &Request::ScnByGrade(1.1), &demand)? {
        Some(name) => log::info!("{}.run | Recommended: {}", dbgid, name),
        None => log::info!("{}.run | This grade is insufficient, select a higher grade", dbgid),
    }
    let point = probe.evaluate(&fender_event, energy.design_energy)?;
    log::info!(
        "{}.run | {}: deflection={:.0}mm reaction={:.0}kN capacity={:.1}kNm exceeded={}",
        dbgid,
        probe.name(),
        point.deflection,
        point.reaction,
        point.capacity,
        point.capacity_exceeded
    );
    Ok(())
}
