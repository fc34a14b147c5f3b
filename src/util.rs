//! Geometry primitives shared by the recognizer, rasterizer, and outline generator.
//!
//! This module provides:
//! - [`Point`]: an immutable 2D coordinate in caller-defined units
//! - [`Rect`]: an axis-aligned floating-point rectangle with bounding-box helpers
//! - Small vector helpers (distance, interpolation, perpendicular deviation)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Points
// ============================================================================

/// A 2D coordinate.
///
/// The coordinate space is defined by the caller: device points for recognition,
/// floating-point canvas units for outlines. Y grows downward in every caller
/// of this crate, which matters only for the arc winding convention.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// `chord` must be the (non-zero) distance between `a` and `b`; callers already
/// have it at hand and use it to normalize the result.
pub fn perpendicular_distance(p: Point, a: Point, b: Point, chord: f64) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / chord
}

/// Angle in radians between two direction vectors, or `None` when either is
/// too short to have a meaningful direction.
pub fn turn_angle(v1: (f64, f64), v2: (f64, f64)) -> Option<f64> {
    let len1 = v1.0.hypot(v1.1);
    let len2 = v2.0.hypot(v2.1);
    if len1 <= 0.01 || len2 <= 0.01 {
        return None;
    }
    let cos = (v1.0 * v2.0 + v1.1 * v2.1) / (len1 * len2);
    Some(cos.clamp(-1.0, 1.0).acos())
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle in floating-point units.
///
/// Width and height are non-negative for every rectangle this crate produces.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from min/max bounds.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Tight bounding box of `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        Some(Self::from_min_max(min_x, min_y, max_x, max_y))
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Length of the diagonal.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Short side over long side, in `[0, 1]`. Zero for a degenerate rectangle.
    pub fn aspect(&self) -> f64 {
        let long = self.width.max(self.height);
        if long <= 0.0 {
            return 0.0;
        }
        self.width.min(self.height) / long
    }

    /// Square with the same center whose side is the mean of width and height.
    pub fn squared(&self) -> Rect {
        let side = (self.width + self.height) / 2.0;
        Rect::new(
            self.mid_x() - side / 2.0,
            self.mid_y() - side / 2.0,
            side,
            side,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}
