use super::*;
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
/// Linear interpolation with the asymmetric boundary policy.
#[test]
fn interpolate_boundaries() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = "interpolate_boundaries";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let args = [0.0, 10.0, 20.0];
    let values = [1.0, 2.0, 4.0];
    #[rustfmt::skip]
    let test_data = [
        // 0
        (-5.0, None,      1.0),
        (0.0,  None,      1.0),
        (0.0,  Some(9.0), 1.0),
        (5.0,  None,      1.5),
        (10.0, None,      2.0),
        // 5
        (15.0, Some(9.0), 3.0),
        (20.0, None,      4.0),
        (20.0, Some(0.5), 0.5),
        (25.0, None,      4.0),
        (25.0, Some(1.0), 1.0),
    ];
    for (step, (val, right, target)) in test_data.into_iter().enumerate() {
        let result = interpolate(val, &args, &values, right);
        assert!(
            (result - target).abs() < 1e-12,
            "{} | step={} val={} right={:?} result={} target={}",
            dbgid, step, val, right, result, target
        );
    }
    assert!(interpolate(f64::NAN, &args, &values, None).is_nan());
    assert!(interpolate(1.0, &[], &[], Some(1.0)).is_nan());
    assert!(interpolate(1.0, &args, &values[..2], None).is_nan());
    test_duration.exit();
}
///
/// Monotonic table gives monotonic output.
#[test]
fn interpolate_monotonic() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = "interpolate_monotonic";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let args = [0.0, 3.0, 5.0, 8.0, 10.0, 15.0, 20.0];
    let values = [1.0, 0.99, 0.97, 0.9, 0.85, 0.7, 0.6];
    let mut prev = f64::INFINITY;
    for step in 0..=250 {
        let val = -2.5 + step as f64 * 0.1;
        let result = interpolate(val, &args, &values, None);
        assert!(
            result <= prev,
            "{} | step={} val={} result={} prev={}",
            dbgid, step, val, result, prev
        );
        prev = result;
    }
    test_duration.exit();
}
///
/// Strictly ascending check.
#[test]
fn strictly_ascending() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = "strictly_ascending";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let test_data: [(&[f64], bool); 6] = [
        (&[], true),
        (&[1.0], true),
        (&[0.0, 1.0, 2.5], true),
        (&[0.0, 1.0, 1.0], false),
        (&[0.0, 2.0, 1.0], false),
        (&[0.0, f64::NAN], false),
    ];
    for (step, (args, target)) in test_data.into_iter().enumerate() {
        let result = is_strictly_ascending(args);
        assert_eq!(result, target, "{} | step={} args={:?}", dbgid, step, args);
    }
    test_duration.exit();
}
