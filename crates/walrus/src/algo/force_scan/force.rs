//! Pairwise separation forces.
//!
//! Both functions are pure: given two boxes they return the push that would clear the
//! pair, without looking at any other box. Direction is picked by comparing the pair's
//! center slope against the combined aspect of the two boxes.

use crate::geom::{Rect, Vector, vector};

use super::COORD_TOLERANCE;

/// Push separating `vj` from `vi`, along X for pairs that lean flat and along Y for the
/// rest. A non-positive relevant component means the pair is already clear that way.
pub fn force(vi: &Rect, vj: &Rect) -> Vector {
    let d = vj.center() - vi.center();
    if coincident(d) {
        return vector(0.0, 0.0);
    }

    let width_sum = vi.size.width + vj.size.width;
    let height_sum = vi.size.height + vj.size.height;
    let slope = d.y / d.x;

    if leans_flat(slope, height_sum / width_sum) {
        let fx = d.x.signum() * (width_sum / 2.0 - d.x.abs());
        vector(fx, fx * slope)
    } else {
        let fy = d.y.signum() * (height_sum / 2.0 - d.y.abs());
        vector(fy / slope, fy)
    }
}

/// Push used by the vertical pass for pairs that still intersect: the minimal
/// simultaneous clears in X and Y, disambiguated by the same slope comparison as
/// [`force`], with both components clamped non-negative. Zero for disjoint pairs.
pub fn force2(vi: &Rect, vj: &Rect) -> Vector {
    let d = vj.center() - vi.center();
    if coincident(d) || !vi.intersects(vj) {
        return vector(0.0, 0.0);
    }

    let width_sum = vi.size.width + vj.size.width;
    let height_sum = vi.size.height + vj.size.height;
    let slope = d.y / d.x;

    let mut fx = width_sum / 2.0 - d.x.abs();
    let mut fy = height_sum / 2.0 - d.y.abs();
    if leans_flat(slope, height_sum / width_sum) {
        fy = fx * slope;
    } else {
        fx = fy / slope;
    }
    vector(fx.max(0.0), fy.max(0.0))
}

// Coincident centers give a pair no direction to separate along; returning a zero push
// keeps an undefined slope from leaking into the sweeps.
fn coincident(d: Vector) -> bool {
    d.x.abs() <= COORD_TOLERANCE && d.y.abs() <= COORD_TOLERANCE
}

// A pair leans flat when its relative position is shallower than the stacked aspect of
// the two boxes; flat pairs separate along X, the rest along Y.
fn leans_flat(slope: f64, combined: f64) -> bool {
    (slope > 0.0 && combined >= slope) || (slope < 0.0 && -combined <= slope) || slope == 0.0
}
