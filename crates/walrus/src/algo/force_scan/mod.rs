//! Force-scan compaction.
//!
//! Each pass sorts the boxes along one axis, walks the sorted order grouping boxes that
//! share a sweep position, and pushes every group just far enough to clear everything
//! already finalized behind it ("catch-up" via `gamma`, with `sigma` as the running
//! fallback baseline). Gap handling inflates every box by half the configured gap per
//! side first, so "keep this much clearance" reduces to "do not overlap".

use indexmap::IndexMap;

use crate::algo::{Axis, ForceScanOptions, RemovalCost};
use crate::error::{Error, Result};
use crate::geom::{Point, Rect, Vector};

pub mod force;

/// Coordinates closer than this are treated as the same sweep position.
///
/// This is the single knob governing degenerate-group detection; tests reuse it for
/// their own near-equality assertions.
pub const COORD_TOLERANCE: f64 = 1e-9;

/// Offset spreading exactly tied sweep positions apart in the single-axis scan.
/// Far smaller than any legitimate gap.
pub(crate) const TIE_NUDGE: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
pub(crate) enum SweepPlan {
    /// X pass, then Y pass on the already-adjusted set.
    TwoAxis,
    /// One perturbation-hardened pass; the other axis never moves.
    OneAxis(Axis),
}

pub(crate) type AbortCheck<'a> = &'a dyn Fn() -> bool;

/// Run the two-axis scan over `boxes`, honoring the gaps in `opts`.
pub fn remove_overlap<K>(
    boxes: &mut IndexMap<K, Rect>,
    opts: &ForceScanOptions,
) -> Result<RemovalCost>
where
    K: std::hash::Hash + Eq,
{
    run(
        boxes,
        opts.horizontal_gap(),
        opts.vertical_gap(),
        SweepPlan::TwoAxis,
        None,
    )
}

pub(crate) fn run<K>(
    boxes: &mut IndexMap<K, Rect>,
    horizontal_gap: f64,
    vertical_gap: f64,
    plan: SweepPlan,
    abort: Option<AbortCheck<'_>>,
) -> Result<RemovalCost>
where
    K: std::hash::Hash + Eq,
{
    let timing_enabled = std::env::var("WALRUS_FSA_TIMING").ok().as_deref() == Some("1");
    let total_start = timing_enabled.then(std::time::Instant::now);

    let mut work = wrap(boxes)?;
    if work.is_empty() {
        return Ok(RemovalCost::default());
    }

    checkpoint(abort)?;
    add_gaps(&mut work, horizontal_gap, vertical_gap);

    checkpoint(abort)?;
    let sweep_start = timing_enabled.then(std::time::Instant::now);
    let cost = match plan {
        SweepPlan::TwoAxis => RemovalCost {
            horizontal: sweep(&mut work, Axis::Horizontal, false),
            vertical: sweep(&mut work, Axis::Vertical, false),
        },
        SweepPlan::OneAxis(axis) => {
            let c = sweep(&mut work, axis, true);
            match axis {
                Axis::Horizontal => RemovalCost {
                    horizontal: c,
                    vertical: 0.0,
                },
                Axis::Vertical => RemovalCost {
                    horizontal: 0.0,
                    vertical: c,
                },
            }
        }
    };

    checkpoint(abort)?;
    remove_gaps(&mut work, horizontal_gap, vertical_gap);
    write_back(boxes, &work);

    if let (Some(total), Some(sweeps)) = (total_start, sweep_start) {
        eprintln!(
            "[walrus-fsa-timing] total={:?} sweeps={:?} boxes={}",
            total.elapsed(),
            sweeps.elapsed(),
            work.len()
        );
    }

    Ok(cost)
}

#[derive(Debug, Clone, Copy)]
struct ScanBox {
    /// Insertion index in the caller's map; also the sort tie-breaker.
    idx: usize,
    rect: Rect,
    /// Origin recorded when the scan geometry was set up. Sweep displacement is measured
    /// from here, so an axis a sweep never writes stays bit-identical through write-back.
    start: Point,
}

impl ScanBox {
    fn center_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.rect.center().x,
            Axis::Vertical => self.rect.center().y,
        }
    }

    fn lead_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.rect.origin.x,
            Axis::Vertical => self.rect.origin.y,
        }
    }

    fn set_lead(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.rect.origin.x = value,
            Axis::Vertical => self.rect.origin.y = value,
        }
    }

    fn nudge(&mut self, axis: Axis, amount: f64) {
        match axis {
            Axis::Horizontal => self.rect.origin.x += amount,
            Axis::Vertical => self.rect.origin.y += amount,
        }
    }
}

// The scratch arena is rebuilt from the caller's map on every run; nothing survives
// between invocations. Validation happens here, before anything is mutated.
fn wrap<K>(boxes: &IndexMap<K, Rect>) -> Result<Vec<ScanBox>>
where
    K: std::hash::Hash + Eq,
{
    let mut work = Vec::with_capacity(boxes.len());
    for (idx, r) in boxes.values().enumerate() {
        let valid = r.origin.x.is_finite()
            && r.origin.y.is_finite()
            && r.size.width.is_finite()
            && r.size.height.is_finite()
            && r.size.width >= 0.0
            && r.size.height >= 0.0;
        if !valid {
            return Err(Error::InvalidBox { index: idx });
        }
        work.push(ScanBox {
            idx,
            rect: *r,
            start: r.origin,
        });
    }
    Ok(work)
}

// Grow each collision footprint by the full gap (half per side) while leaving the visual
// footprint centered where it was; non-overlap of inflated boxes is exactly "original
// boxes clear by at least the gap".
fn add_gaps(work: &mut [ScanBox], horizontal_gap: f64, vertical_gap: f64) {
    for b in work {
        b.rect = b.rect.inflate(horizontal_gap / 2.0, vertical_gap / 2.0);
        b.start = b.rect.origin;
    }
}

// Inverse of `add_gaps`. The recorded scan origin moves by the same amount as the box,
// keeping the write-back shift exactly zero on an axis the sweeps never wrote.
fn remove_gaps(work: &mut [ScanBox], horizontal_gap: f64, vertical_gap: f64) {
    for b in work {
        b.rect = b.rect.inflate(-horizontal_gap / 2.0, -vertical_gap / 2.0);
        b.start.x += horizontal_gap / 2.0;
        b.start.y += vertical_gap / 2.0;
    }
}

// One bulk write at the very end of a run: only origins move, sizes are never rewritten,
// and a reader of the map before this point sees the input placement unchanged.
fn write_back<K>(boxes: &mut IndexMap<K, Rect>, work: &[ScanBox])
where
    K: std::hash::Hash + Eq,
{
    let mut shift = vec![Vector::zero(); work.len()];
    for b in work {
        shift[b.idx] = b.rect.origin - b.start;
    }
    for (i, r) in boxes.values_mut().enumerate() {
        r.origin += shift[i];
    }
}

fn checkpoint(abort: Option<AbortCheck<'_>>) -> Result<()> {
    match abort {
        Some(requested) if requested() => Err(Error::Aborted),
        _ => Ok(()),
    }
}

/// One compaction pass along `axis`. Returns the squared displacement it applied.
fn sweep(work: &mut [ScanBox], axis: Axis, perturb_ties: bool) -> f64 {
    let n = work.len();

    work.sort_by(|a, b| {
        a.center_on(axis)
            .total_cmp(&b.center_on(axis))
            .then(a.idx.cmp(&b.idx))
    });

    let origin_center = work[0].center_on(axis);
    let mut lead_min = work[0].lead_on(axis);
    let mut sigma = 0.0_f64;
    let mut gamma = vec![0.0_f64; n];
    let mut target = vec![0.0_f64; n];

    // Catch-up forces differ per axis: the vertical pass only pulls in pairs that still
    // intersect after the horizontal one.
    let catch_up: fn(&Rect, &Rect) -> Vector = match axis {
        Axis::Horizontal => force::force,
        Axis::Vertical => force::force2,
    };

    let mut i = 0;
    while i < n {
        // Maximal run of boxes sharing this sweep position (tolerant chaining).
        let mut k = i;
        while k + 1 < n && near_equal(work[k + 1].center_on(axis), work[k].center_on(axis)) {
            k += 1;
        }

        if perturb_ties && k > i {
            // Spread exact ties by a hair so later force evaluations see a defined
            // direction instead of a zero-extent group.
            for (z, b) in work[i..=k].iter_mut().enumerate() {
                b.nudge(axis, z as f64 * TIE_NUDGE);
            }
        }

        let mut g = 0.0_f64;
        if work[k].center_on(axis) > origin_center {
            for m in i..=k {
                let mut ggg = 0.0_f64;
                for j in 0..i {
                    let f = catch_up(&work[j].rect, &work[m].rect);
                    ggg = ggg.max(component(f, axis) + gamma[j]);
                }
                // A box reaching further back than anything finalized so far must not be
                // dragged past the current global minimum; fall back to the running
                // baseline instead.
                let gg = if work[m].lead_on(axis) + ggg < lead_min {
                    sigma
                } else {
                    ggg
                };
                g = g.max(gg);
            }
        }

        for m in i..=k {
            gamma[m] = g;
            target[m] = work[m].lead_on(axis) + g;
            lead_min = lead_min.min(work[m].lead_on(axis));
        }

        // Forward pressure this group exerts on everything after it; sigma only grows.
        let mut delta = 0.0_f64;
        for m in i..=k {
            for j in (k + 1)..n {
                let f = force::force(&work[m].rect, &work[j].rect);
                delta = delta.max(component(f, axis));
            }
        }
        sigma += delta;

        i = k + 1;
    }

    let mut cost = 0.0;
    for m in 0..n {
        let old = work[m].lead_on(axis);
        work[m].set_lead(axis, target[m]);
        let moved = target[m] - old;
        cost += moved * moved;
    }
    cost
}

fn near_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= COORD_TOLERANCE
}

fn component(f: Vector, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => f.x,
        Axis::Vertical => f.y,
    }
}
