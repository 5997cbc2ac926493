#![forbid(unsafe_code)]

//! Headless rectangle overlap removal for graph layouts (force-scan family ports).
//!
//! `walrus` takes the node bounding boxes an upstream layout produced (force-directed,
//! tree, anything that yields axis-aligned boxes) and compacts them until no two boxes
//! overlap, disturbing the original arrangement as little as the scan heuristic allows
//! while honoring a configurable minimum gap. It does no layout of its own: boxes arrive
//! sized and placed, and only their positions ever change.
//!
//! Two strategies are provided:
//! - [`Algorithm::ForceScan`]: a horizontal pass followed by a vertical pass. Greedy and
//!   single-shot; pairs whose only separating direction is diagonal can remain imperfectly
//!   separated, which is why each pass reports its squared-displacement cost.
//! - [`Algorithm::OneWayForceScan`]: one pass along a chosen axis, leaving the other
//!   coordinate of every box untouched.

pub mod algo;
pub mod error;
pub mod geom;
pub mod runtime;

pub use algo::{Algorithm, Axis, ForceScanOptions, OneWayForceScanOptions, RemovalCost};
pub use error::{Error, Result};
pub use geom::{Point, Rect, Size, Vector};
pub use runtime::{RunState, Runner};

use indexmap::IndexMap;

/// Headless overlap-removal entry point.
///
/// Box positions in `boxes` are rewritten in place, in one bulk pass at the very end of
/// the run; sizes are never touched. On any error the map is left exactly as it was.
pub fn remove_overlap<K>(boxes: &mut IndexMap<K, Rect>, algorithm: Algorithm) -> Result<RemovalCost>
where
    K: std::hash::Hash + Eq,
{
    algo::dispatch(boxes, &algorithm, None)
}
