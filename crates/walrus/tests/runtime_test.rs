use std::sync::Arc;
use std::thread;

use indexmap::IndexMap;
use walrus::geom::{Rect, rect};
use walrus::{Algorithm, Error, ForceScanOptions, RunState, Runner, remove_overlap};

fn overlapping_row(count: usize) -> IndexMap<usize, Rect> {
    (0..count)
        .map(|i| (i, rect(i as f64 * 2.0, 0.0, 3.0, 3.0)))
        .collect()
}

fn two_axis(h_gap: f64, v_gap: f64) -> Algorithm {
    Algorithm::ForceScan(ForceScanOptions::new(h_gap, v_gap).expect("test gaps are valid"))
}

#[test]
fn runner_starts_not_running_and_finishes_a_run() {
    let runner = Runner::new();
    assert_eq!(runner.state(), RunState::NotRunning);

    let mut boxes = overlapping_row(4);
    let mut reference = boxes.clone();

    let cost = runner.run(&mut boxes, two_axis(1.0, 1.0)).unwrap();
    assert_eq!(runner.state(), RunState::Finished);

    // The lifecycle wrapper changes nothing about the computation itself.
    let direct = remove_overlap(&mut reference, two_axis(1.0, 1.0)).unwrap();
    assert_eq!(cost, direct);
    assert_eq!(boxes, reference);
}

#[test]
fn abort_request_while_idle_is_refused() {
    let runner = Runner::new();
    assert!(!runner.request_abort());
    assert_eq!(runner.state(), RunState::NotRunning);

    let mut boxes = overlapping_row(3);
    runner.run(&mut boxes, two_axis(1.0, 1.0)).unwrap();
    assert!(!runner.request_abort());
    assert_eq!(runner.state(), RunState::Finished);
}

#[test]
fn runner_is_reusable_across_runs() {
    let runner = Runner::new();

    let mut boxes = overlapping_row(5);
    runner.run(&mut boxes, two_axis(1.0, 1.0)).unwrap();
    assert_eq!(runner.state(), RunState::Finished);

    // Re-running the already-clean result is a no-op but a full lifecycle nonetheless.
    let cost = runner.run(&mut boxes, two_axis(1.0, 1.0)).unwrap();
    assert_eq!(cost.total(), 0.0);
    assert_eq!(runner.state(), RunState::Finished);
}

#[test]
fn cross_thread_abort_lands_on_a_phase_boundary_or_not_at_all() {
    let runner = Arc::new(Runner::new());
    let boxes = overlapping_row(1500);
    let input = boxes.clone();

    let worker = {
        let runner = Arc::clone(&runner);
        let mut boxes = boxes;
        thread::spawn(move || {
            let out = runner.run(&mut boxes, two_axis(1.0, 1.0));
            (boxes, out)
        })
    };

    loop {
        if runner.request_abort() || worker.is_finished() {
            break;
        }
        thread::yield_now();
    }

    let (boxes, out) = worker.join().expect("worker thread panicked");
    match out {
        // The abort landed on a phase boundary: nothing was written back.
        Err(Error::Aborted) => {
            assert_eq!(runner.state(), RunState::Aborted);
            assert_eq!(boxes, input);
        }
        // The run beat the abort request; that is equally legal.
        Ok(_) => assert_eq!(runner.state(), RunState::Finished),
        Err(other) => panic!("unexpected error: {other}"),
    }
}
