//! Geometry primitives shared by the scan passes.
//!
//! Thin aliases over `euclid`; all coordinates are `f64` in one unit-less space.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    euclid::rect(x, y, width, height)
}

/// Marker for "no rectangle". Some callers keep one around as an absence value;
/// the overlap-removal passes never produce it.
pub fn empty_rect() -> Rect {
    rect(0.0, 0.0, -1.0, -1.0)
}

pub fn is_empty_rect(r: &Rect) -> bool {
    r.size.width < 0.0
}
