//! Single-axis force scan.
//!
//! The same machinery as the two-axis scan, restricted to the configured axis and
//! hardened with a deterministic tie perturbation so exactly coincident sweep positions
//! never form a zero-extent group. Callers pick it when the other coordinate must
//! survive untouched (timelines, swimlanes, layered drawings).

use indexmap::IndexMap;

use crate::algo::force_scan::{self, SweepPlan};
use crate::algo::{OneWayForceScanOptions, RemovalCost};
use crate::error::Result;
use crate::geom::Rect;

/// Run the scan along `opts.axis` only; every box keeps its other coordinate exactly.
pub fn remove_overlap<K>(
    boxes: &mut IndexMap<K, Rect>,
    opts: &OneWayForceScanOptions,
) -> Result<RemovalCost>
where
    K: std::hash::Hash + Eq,
{
    force_scan::run(
        boxes,
        opts.horizontal_gap(),
        opts.vertical_gap(),
        SweepPlan::OneAxis(opts.axis),
        None,
    )
}
