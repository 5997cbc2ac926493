pub mod force_scan;
pub mod one_way;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::geom::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Algorithm {
    /// Two-pass force scan: compact along X, then along Y.
    ForceScan(ForceScanOptions),
    /// Single-pass force scan restricted to one axis; the other axis is preserved exactly.
    OneWayForceScan(OneWayForceScanOptions),
}

/// Minimum-clearance parameters for the two-axis scan.
///
/// Gaps are validated when assigned: a negative (or non-finite) gap is refused outright
/// rather than clamped, so a misconfigured caller fails at the assignment site.
#[derive(Debug, Clone, Copy)]
pub struct ForceScanOptions {
    horizontal_gap: f64,
    vertical_gap: f64,
}

impl ForceScanOptions {
    pub fn new(horizontal_gap: f64, vertical_gap: f64) -> Result<Self> {
        Ok(Self {
            horizontal_gap: validate_gap(Axis::Horizontal, horizontal_gap)?,
            vertical_gap: validate_gap(Axis::Vertical, vertical_gap)?,
        })
    }

    pub fn horizontal_gap(&self) -> f64 {
        self.horizontal_gap
    }

    pub fn vertical_gap(&self) -> f64 {
        self.vertical_gap
    }

    pub fn set_horizontal_gap(&mut self, gap: f64) -> Result<()> {
        self.horizontal_gap = validate_gap(Axis::Horizontal, gap)?;
        Ok(())
    }

    pub fn set_vertical_gap(&mut self, gap: f64) -> Result<()> {
        self.vertical_gap = validate_gap(Axis::Vertical, gap)?;
        Ok(())
    }
}

impl Default for ForceScanOptions {
    fn default() -> Self {
        Self {
            horizontal_gap: 10.0,
            vertical_gap: 10.0,
        }
    }
}

/// Parameters for the single-axis scan: the same two gaps plus the axis to compact along.
///
/// Both gaps still matter even though only one axis moves; the collision footprint is
/// inflated on both axes before the pass runs.
#[derive(Debug, Clone, Copy)]
pub struct OneWayForceScanOptions {
    horizontal_gap: f64,
    vertical_gap: f64,
    pub axis: Axis,
}

impl OneWayForceScanOptions {
    pub fn new(horizontal_gap: f64, vertical_gap: f64, axis: Axis) -> Result<Self> {
        Ok(Self {
            horizontal_gap: validate_gap(Axis::Horizontal, horizontal_gap)?,
            vertical_gap: validate_gap(Axis::Vertical, vertical_gap)?,
            axis,
        })
    }

    pub fn horizontal_gap(&self) -> f64 {
        self.horizontal_gap
    }

    pub fn vertical_gap(&self) -> f64 {
        self.vertical_gap
    }

    pub fn set_horizontal_gap(&mut self, gap: f64) -> Result<()> {
        self.horizontal_gap = validate_gap(Axis::Horizontal, gap)?;
        Ok(())
    }

    pub fn set_vertical_gap(&mut self, gap: f64) -> Result<()> {
        self.vertical_gap = validate_gap(Axis::Vertical, gap)?;
        Ok(())
    }
}

impl Default for OneWayForceScanOptions {
    fn default() -> Self {
        Self {
            horizontal_gap: 10.0,
            vertical_gap: 10.0,
            axis: Axis::Horizontal,
        }
    }
}

fn validate_gap(axis: Axis, gap: f64) -> Result<f64> {
    if gap < 0.0 || !gap.is_finite() {
        return Err(Error::NegativeGap { axis, value: gap });
    }
    Ok(gap)
}

/// Squared-displacement diagnostic, one entry per sweep axis.
///
/// The scans are greedy single passes; a caller can watch these to detect a layout that
/// needed large corrections and decide whether a follow-up run is worth it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RemovalCost {
    pub horizontal: f64,
    pub vertical: f64,
}

impl RemovalCost {
    pub fn total(&self) -> f64 {
        self.horizontal + self.vertical
    }
}

pub(crate) fn dispatch<K>(
    boxes: &mut IndexMap<K, Rect>,
    algorithm: &Algorithm,
    abort: Option<force_scan::AbortCheck<'_>>,
) -> Result<RemovalCost>
where
    K: std::hash::Hash + Eq,
{
    match algorithm {
        Algorithm::ForceScan(opts) => force_scan::run(
            boxes,
            opts.horizontal_gap(),
            opts.vertical_gap(),
            force_scan::SweepPlan::TwoAxis,
            abort,
        ),
        Algorithm::OneWayForceScan(opts) => force_scan::run(
            boxes,
            opts.horizontal_gap(),
            opts.vertical_gap(),
            force_scan::SweepPlan::OneAxis(opts.axis),
            abort,
        ),
    }
}
