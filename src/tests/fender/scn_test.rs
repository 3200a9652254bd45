use super::*;
use crate::catalog::fixture;
use debugging::session::debug_session::{Backtrace, DebugSession, LogLevel};
use std::{sync::Once, time::Duration};
use testing::stuff::max_test_duration::TestDuration;
//
//
static INIT: Once = Once::new();
///
/// Once called initialisation.
fn init_once() {
    //
    // Implement your initialisation code to be called only once for current test file.
    INIT.call_once(|| {})
}
///
/// Returns SCN1050-F1.1 with 10% tolerances.
fn init_each(dbgid: &DbgId) -> Scn {
    let catalog = fixture::catalog(dbgid);
    Scn::new(
        dbgid,
        &catalog.scn,
        "SCN1050",
        1.1,
        Material::Blend,
        Tolerance::new(0.1, 0.1).unwrap(),
    )
    .unwrap()
}
///
/// Rated values and depth taken from the catalog and the size.
#[test]
fn new() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Scn".to_string());
    let callee = "new";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid);
    assert_eq!(fender.depth(), 1050.0, "{}.{}", dbgid, callee);
    assert_eq!(fender.rated_energy(), 446.6, "{}.{}", dbgid, callee);
    assert_eq!(fender.rated_reaction(), 713.4, "{}.{}", dbgid, callee);
    assert_eq!(fender.name(), "SCN1050-F1.1");
    let catalog = fixture::catalog(&dbgid);
    let tolerance = Tolerance::default();
    assert!(matches!(
        Scn::new(&dbgid, &catalog.scn, "SCN9999", 1.1, Material::Blend, tolerance),
        Err(Error::CatalogLookup(_))
    ));
    assert!(matches!(
        Scn::new(&dbgid, &catalog.scn, "SCN1050", 1.7, Material::Blend, tolerance),
        Err(Error::CatalogLookup(_))
    ));
    assert!(matches!(Scn::depth_of("SCN"), Err(Error::Validation(_))));
    assert_eq!(Scn::depth_of("SCN300"), Ok(300.0));
    test_duration.exit();
}
///
/// Energy and reaction angle factors.
#[test]
fn angle_factor() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Scn".to_string());
    let callee = "angle_factor";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid);
    #[rustfmt::skip]
    let test_data = [
        // 0
        (0.0,  (1.000, 1.000)),
        (5.0,  (1.055, 1.000)),
        (4.0,  (1.047, 1.000)),
        (15.0, (0.856, 0.950)),
        (20.0, (0.739, 0.800)),
        // 5
        (30.0, (0.739, 0.800)),
    ];
    for (step, (angle, (energy, reaction))) in test_data.into_iter().enumerate() {
        let (e, r) = fender.angle_factor(angle).unwrap();
        assert!(
            (e - energy).abs() < 0.001 && (r - reaction).abs() < 0.001,
            "{}.{} | step={} angle={} result=({}, {}) target=({}, {})",
            dbgid, callee, step, angle, e, r, energy, reaction
        );
    }
    test_duration.exit();
}
///
/// Velocity and temperature factors of the Blend material.
#[test]
fn environment_factors() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Scn".to_string());
    let callee = "environment_factors";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid);
    let velocity = fender.velocity_factor(0.1).unwrap();
    assert!((velocity - 1.07).abs() < 0.005, "{}.{} | velocity factor={}", dbgid, callee, velocity);
    // compression time beyond the table
    assert_eq!(fender.velocity_factor(0.01).unwrap(), 1.0);
    assert!(matches!(fender.velocity_factor(0.0), Err(Error::Validation(_))));
    let temperature = fender.temperature_factor(40.0).unwrap();
    assert!((temperature - 0.947).abs() < 0.0005, "{}.{} | temperature factor={}", dbgid, callee, temperature);
    assert_eq!(fender.temperature_factor(60.0).unwrap(), 1.0);
    assert_eq!(fender.temperature_factor(-40.0).unwrap(), 1.540);
    test_duration.exit();
}
///
/// Capacity factor combines the angle, velocity and temperature factors.
#[test]
fn capacity_factor() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Scn".to_string());
    let callee = "capacity_factor";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid);
    let result = fender.capacity_factor(&FenderEvent::default()).unwrap();
    assert_eq!(result, CapacityFactor::new(1.0, 1.0), "{}.{}", dbgid, callee);
    let event = FenderEvent {
        berthing_angle: 5.0,
        velocity: 0.1,
        max_temperature: 40.0,
        min_temperature: -10.0,
        ..Default::default()
    };
    let result = fender.capacity_factor(&event).unwrap();
    let target = CapacityFactor::new(1.055 * 1.07 * 0.947, 1.0 * 1.07 * 1.130);
    assert!(
        (result.energy - target.energy).abs() < 0.005 && (result.reaction - target.reaction).abs() < 0.005,
        "{}.{} | result={:?} target={:?}",
        dbgid, callee, result, target
    );
    test_duration.exit();
}
///
/// Design point of the energy within and beyond the capacity.
#[test]
fn design_point() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Scn".to_string());
    let callee = "design_point";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid);
    let point = fender.design_point(300.0, CapacityFactor::default()).unwrap();
    assert!(
        (point.curve.energy_at(point.deflection) - 300.0).abs() < 1e-6,
        "{}.{} | round trip failed: {:?}",
        dbgid, callee, point
    );
    assert!((point.capacity - 446.6 * 0.9).abs() < 1e-9);
    assert!(!point.capacity_exceeded);
    assert!(point.deflection > 0.5 * 1050.0 && point.deflection < 0.55 * 1050.0);
    assert_eq!(point.pressure, None);
    let point = fender.design_point(500.0, CapacityFactor::default()).unwrap();
    assert!(point.capacity_exceeded);
    assert!((point.deflection - 0.75 * 1050.0).abs() < 1e-9);
    assert!((point.reaction - 713.4 * 1.1 * 1.1).abs() < 1e-9);
    assert!(matches!(
        fender.design_point(-1.0, CapacityFactor::default()),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        fender.design_point(300.0, CapacityFactor::new(0.0, 1.0)),
        Err(Error::Validation(_))
    ));
    test_duration.exit();
}
///
/// Repeated evaluation gives identical results.
#[test]
fn evaluate_idempotent() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Scn".to_string());
    let callee = "evaluate_idempotent";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid);
    let event = FenderEvent {
        berthing_angle: 5.0,
        velocity: 0.1,
        ..Default::default()
    };
    let first = fender.evaluate(&event, 350.0).unwrap();
    for step in 0..3 {
        let result = fender.evaluate(&event, 350.0).unwrap();
        assert_eq!(result, first, "{}.{} | step={}", dbgid, callee, step);
    }
    test_duration.exit();
}
///
/// Non-finite or out of the domain conditions are rejected.
#[test]
fn capacity_factor_invalid_event() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Scn".to_string());
    let callee = "capacity_factor_invalid_event";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid);
    let valid = FenderEvent::new(5.0, 5.0, 0.1, 40.0, 0.0).unwrap();
    #[rustfmt::skip]
    let test_data = [
        // 0
        FenderEvent { berthing_angle: f64::NAN, ..valid },
        FenderEvent { longitudinal_angle: f64::INFINITY, ..valid },
        FenderEvent { max_temperature: f64::NAN, ..valid },
        FenderEvent { min_temperature: f64::NEG_INFINITY, ..valid },
        FenderEvent { velocity: 0.0, ..valid },
        // 5
        FenderEvent { velocity: f64::NAN, ..valid },
    ];
    for (step, event) in test_data.into_iter().enumerate() {
        let result = fender.capacity_factor(&event);
        assert!(
            matches!(result, Err(Error::Validation(_))),
            "{}.{} | step={} event={:?} result={:?}",
            dbgid, callee, step, event, result
        );
        assert!(matches!(fender.evaluate(&event, 50.0), Err(Error::Validation(_))));
        assert!(matches!(
            FenderEvent::new(
                event.berthing_angle,
                event.longitudinal_angle,
                event.velocity,
                event.max_temperature,
                event.min_temperature,
            ),
            Err(Error::Validation(_))
        ));
    }
    assert!(matches!(fender.angle_factor(f64::NAN), Err(Error::Validation(_))));
    assert!(matches!(fender.temperature_factor(f64::INFINITY), Err(Error::Validation(_))));
    assert!(fender.capacity_factor(&valid).unwrap().energy.is_finite());
    test_duration.exit();
}
