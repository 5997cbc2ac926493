//! Cooperative lifecycle around one overlap-removal computation.
//!
//! The compaction itself is synchronous and single-threaded; this wrapper adds the state
//! bookkeeping embedders expect (is it running? did it finish? was it aborted?) plus a
//! cooperative abort honored between coarse pipeline phases, never mid-sweep — a request
//! landing during a sweep still lets that sweep complete.

use std::sync::Mutex;

use indexmap::IndexMap;

use crate::algo::{self, Algorithm, RemovalCost};
use crate::error::{Error, Result};
use crate::geom::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    NotRunning,
    Running,
    PendingAbortion,
    Finished,
    Aborted,
}

/// Lifecycle guard for one computation at a time.
///
/// A runner can be reused for any number of sequential runs; each run rebuilds its own
/// scratch state. Concurrent runs on the same runner are refused, not queued.
#[derive(Debug, Default)]
pub struct Runner {
    state: Mutex<RunState>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        *self.state.lock().expect("runner state lock poisoned")
    }

    /// Ask a running computation to stop at its next phase boundary.
    ///
    /// Returns `true` when a computation was actually running; it will finish the phase
    /// it is in, then surface [`Error::Aborted`] without touching the caller's map.
    pub fn request_abort(&self) -> bool {
        let mut state = self.state.lock().expect("runner state lock poisoned");
        if *state == RunState::Running {
            *state = RunState::PendingAbortion;
            true
        } else {
            false
        }
    }

    /// Run one computation under lifecycle bookkeeping.
    pub fn run<K>(&self, boxes: &mut IndexMap<K, Rect>, algorithm: Algorithm) -> Result<RemovalCost>
    where
        K: std::hash::Hash + Eq,
    {
        {
            let mut state = self.state.lock().expect("runner state lock poisoned");
            if matches!(*state, RunState::Running | RunState::PendingAbortion) {
                return Err(Error::AlreadyRunning);
            }
            *state = RunState::Running;
        }

        let abort_requested = || self.state() == RunState::PendingAbortion;
        let out = algo::dispatch(boxes, &algorithm, Some(&abort_requested));

        let mut state = self.state.lock().expect("runner state lock poisoned");
        *state = match &out {
            Err(Error::Aborted) => RunState::Aborted,
            _ => RunState::Finished,
        };
        out
    }
}
