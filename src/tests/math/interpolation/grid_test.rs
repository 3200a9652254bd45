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
/// Returns the MV transverse angle factor grid.
fn init_each(dbgid: &DbgId) -> Grid {
    Grid::new(
        dbgid,
        vec![0.0, 5.0, 10.0, 15.0],
        vec![1.2, 1.4, 1.6, 2.0],
        vec![
            1.00, 0.980, 0.960, 0.900,
            1.00, 0.970, 0.910, 0.830,
            1.00, 0.950, 0.875, 0.750,
            1.00, 0.925, 0.790, 0.630,
        ],
    )
    .unwrap()
}
///
/// Values at the nodes, along the grid lines, inside the cells and out of the grid.
#[test]
fn get() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Grid".to_string());
    let callee = "get";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let grid = init_each(&dbgid);
    #[rustfmt::skip]
    let test_data = [
        // 0 nodes
        (0.0,  1.2, 1.0),
        (5.0,  2.0, 0.925),
        (5.0,  1.4, 0.97),
        (15.0, 1.6, 0.75),
        // grid lines
        (7.5,  1.4, 0.94),
        // 5
        (2.5,  1.2, 0.99),
        (10.0, 1.8, 0.8325),
        // lower triangle of the cell
        (2.5,  1.3, 0.985),
        // upper triangle of the cell
        (1.0,  1.35, 0.994),
        // out of the grid
        (20.0, 3.0, 0.63),
        // 10
        (-5.0, 1.0, 1.0),
        (5.0,  0.5, 0.98),
    ];
    for (step, (x, y, target)) in test_data.into_iter().enumerate() {
        let result = grid.get(x, y);
        println!(
            "{}.{} | step={} x={} y={} result={} target={}",
            dbgid, callee, step, x, y, result, target
        );
        assert!(
            (result - target).abs() < 1e-9,
            "{}.{} | step={} x={} y={} result={} target={}",
            dbgid, callee, step, x, y, result, target
        );
    }
    assert!(grid.get(f64::NAN, 1.4).is_nan());
    test_duration.exit();
}
///
/// Invalid grids are rejected.
#[test]
fn new_invalid() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("test Grid".to_string());
    let callee = "new_invalid";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    #[rustfmt::skip]
    let test_data: [(Vec<f64>, Vec<f64>, Vec<f64>); 4] = [
        (vec![0.0],      vec![0.0, 1.0], vec![1.0, 1.0]),
        (vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0, 1.0, 1.0]),
        (vec![0.0, 1.0], vec![0.0, 0.0], vec![1.0, 1.0, 1.0, 1.0]),
        (vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0, 1.0, 1.0]),
    ];
    for (step, (xs, ys, values)) in test_data.into_iter().enumerate() {
        let result = Grid::new(&dbgid, xs, ys, values);
        assert!(
            matches!(result, Err(Error::Validation(_))),
            "{}.{} | step={} expected Validation error",
            dbgid, callee, step
        );
    }
    test_duration.exit();
}
