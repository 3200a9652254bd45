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
    INIT.call_once(|| {})
}
///
/// Returns the MV fender of the `size` and compound A with 2000mm leg spacing.
fn init_each(dbgid: &DbgId, size: &str) -> Mv {
    let catalog = fixture::catalog(dbgid);
    Mv::new(
        dbgid,
        &catalog.mv,
        size,
        Compound::A,
        2000.0,
        Tolerance::symmetric(0.1).unwrap(),
    )
    .unwrap()
}
///
/// Dimensions parsed from the size.
#[test]
fn dimensions_of() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = "mv_dimensions_of";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let test_data = [
        ("1000x1000", Some((1000.0, 1000.0))),
        ("500X2000", Some((500.0, 2000.0))),
        ("300×600", Some((300.0, 600.0))),
        (" 1000 x 1500 ", Some((1000.0, 1500.0))),
        ("1000", None),
        ("1000x", None),
        ("0x1000", None),
        ("1000x1000x1000", None),
        ("MV1000", None),
    ];
    for (step, (size, target)) in test_data.into_iter().enumerate() {
        let result = Mv::dimensions_of(size);
        match target {
            Some(target) => assert_eq!(result, Ok(target), "{} | step={} size='{}'", dbgid, step, size),
            None => assert!(
                matches!(result, Err(Error::Validation(_))),
                "{} | step={} size='{}' result={:?}",
                dbgid, step, size, result
            ),
        }
    }
    test_duration.exit();
}
///
/// Rated values scaled by the unit length.
#[test]
fn new() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Mv".to_string());
    let callee = "new";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let test_data = [
        ("1000x1000", 1000.0, 1000.0, 120.0, 500.0),
        ("1000x2000", 1000.0, 2000.0, 240.0, 1000.0),
        ("500x1000", 500.0, 1000.0, 30.0, 250.0),
    ];
    for (step, (size, depth, length, energy, reaction)) in test_data.into_iter().enumerate() {
        let fender = init_each(&dbgid, size);
        assert_eq!(
            (fender.depth(), fender.length(), fender.leg_spacing(), fender.rated_energy(), fender.rated_reaction()),
            (depth, length, 2000.0, energy, reaction),
            "{}.{} | step={} size='{}'",
            dbgid, callee, step, size
        );
    }
    let catalog = fixture::catalog(&dbgid);
    let tolerance = Tolerance::default();
    assert!(matches!(
        Mv::new(&dbgid, &catalog.mv, "1000x1000", Compound::B, 0.0, tolerance),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        Mv::new(&dbgid, &catalog.mv, "300x600", Compound::B, 2000.0, tolerance),
        Err(Error::CatalogLookup(_))
    ));
    let fender = Mv::new(&dbgid, &catalog.mv, "1000x1000", Compound::B, 2000.0, tolerance).unwrap();
    assert_eq!(fender.rated_energy(), 145.0);
    assert_eq!(fender.name(), "1000x1000-B");
    assert!(!fender.performance_curve().has_pressure());
    test_duration.exit();
}
///
/// Combined transverse and longitudinal angle factor.
#[test]
fn angle_factor() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Mv".to_string());
    let callee = "angle_factor";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    #[rustfmt::skip]
    let test_data = [
        // size, transverse, longitudinal, target
        ("1000x1000", 5.0,  5.0,  0.925 * 0.97),
        ("1000x1000", 0.0,  0.0,  1.0 * 0.99),
        ("1000x1000", 10.0, 0.0,  0.79 * 0.99),
        ("1000x2000", 5.0,  10.0, 0.925 * 0.64),
        ("1000x2000", 20.0, 20.0, 0.63 * 0.5),
    ];
    for (step, (size, transverse, longitudinal, target)) in test_data.into_iter().enumerate() {
        let fender = init_each(&dbgid, size);
        let result = fender.angle_factor(transverse, longitudinal).unwrap();
        assert!(
            (result - target).abs() < 1e-9,
            "{}.{} | step={} size='{}' angles=({}, {}) result={} target={}",
            dbgid, callee, step, size, transverse, longitudinal, result, target
        );
    }
    test_duration.exit();
}
///
/// Capacity factor: the angle reduces the energy only.
#[test]
fn capacity_factor() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Mv".to_string());
    let callee = "capacity_factor";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid, "1000x1000");
    let event = FenderEvent {
        berthing_angle: 5.0,
        longitudinal_angle: 5.0,
        velocity: 0.01,
        max_temperature: 40.0,
        min_temperature: 23.0,
    };
    let result = fender.capacity_factor(&event).unwrap();
    let target = CapacityFactor::new(0.925 * 0.97 * 0.947, 1.0);
    assert!(
        (result.energy - target.energy).abs() < 1e-9 && (result.reaction - target.reaction).abs() < 1e-9,
        "{}.{} | result={:?} target={:?}",
        dbgid, callee, result, target
    );
    let point = fender.evaluate(&event, 50.0).unwrap();
    assert!((point.curve.energy_at(point.deflection) - 50.0).abs() < 1e-6);
    assert!((point.capacity - 120.0 * 0.9 * target.energy).abs() < 1e-9);
    test_duration.exit();
}
///
/// Non-finite or out of the domain conditions are rejected.
#[test]
fn capacity_factor_invalid_event() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Mv".to_string());
    let callee = "capacity_factor_invalid_event";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let fender = init_each(&dbgid, "1000x1000");
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
    assert!(matches!(fender.angle_factor(f64::NAN, 5.0), Err(Error::Validation(_))));
    assert!(matches!(fender.temperature_factor(f64::NAN), Err(Error::Validation(_))));
    assert!(fender.capacity_factor(&valid).unwrap().energy.is_finite());
    test_duration.exit();
}
