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
    //
    // Implement your initialisation code to be called only once for current test file.
    INIT.call_once(|| {})
}
///
/// Returns the table of temperature factors of two materials.
fn init_each(dbgid: &DbgId) -> Table {
    Table::new(
        dbgid,
        vec![-30.0, -20.0, -10.0, 0.0, 10.0, 23.0, 30.0, 40.0, 50.0],
        [
            vec![1.540, 1.249, 1.130, 1.075, 1.030, 1.000, 0.978, 0.947, 0.916],
            vec![1.315, 1.142, 1.080, 1.053, 1.025, 1.000, 0.978, 0.946, 0.914],
        ],
    )
    .unwrap()
}
///
/// Values of the selected column.
#[test]
fn get() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Table".to_string());
    let callee = "get";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let table = init_each(&dbgid);
    #[rustfmt::skip]
    let test_data = [
        // 0
        (0, -40.0, None,      Some(1.540)),
        (0, 23.0,  None,      Some(1.000)),
        (0, 40.0,  Some(1.0), Some(0.947)),
        (0, 35.0,  None,      Some(0.9625)),
        (0, 50.0,  Some(1.0), Some(1.0)),
        // 5
        (0, 60.0,  None,      Some(0.916)),
        (1, 40.0,  None,      Some(0.946)),
        (1, -25.0, None,      Some(1.2285)),
        (2, 0.0,   None,      None),
    ];
    for (step, (col, val, right, target)) in test_data.into_iter().enumerate() {
        let result = table.get(col, val, right);
        println!(
            "{}.{} | step={} col={} val={} result={:?} target={:?}",
            dbgid, callee, step, col, val, result, target
        );
        match (result, target) {
            (Some(result), Some(target)) => assert!(
                (result - target).abs() < 1e-9,
                "{}.{} | step={} result={} target={}",
                dbgid, callee, step, result, target
            ),
            (result, target) => assert_eq!(result, target, "{}.{} | step={}", dbgid, callee, step),
        }
    }
    assert_eq!(table.columns(), 2);
    assert_eq!(table.args().len(), 9);
    assert!(matches!(table.try_get(5, 0.0, None), Err(Error::Validation(_))));
    test_duration.exit();
}
///
/// Invalid tables are rejected.
#[test]
fn new_invalid() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Table".to_string());
    let callee = "new_invalid";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    #[rustfmt::skip]
    let test_data: [(Vec<f64>, Vec<Vec<f64>>); 5] = [
        (vec![],              vec![vec![]]),
        (vec![0.0, 2.0, 1.0], vec![vec![1.0, 2.0, 3.0]]),
        (vec![0.0, 1.0, 1.0], vec![vec![1.0, 2.0, 3.0]]),
        (vec![0.0, 1.0, 2.0], vec![vec![1.0, 2.0]]),
        (vec![0.0, 1.0, 2.0], vec![]),
    ];
    for (step, (args, columns)) in test_data.into_iter().enumerate() {
        let result = Table::new(&dbgid, args, columns);
        assert!(
            matches!(result, Err(Error::Validation(_))),
            "{}.{} | step={} expected Validation error",
            dbgid, callee, step
        );
    }
    test_duration.exit();
}
