//! Open circular arc detection.
//!
//! The circle is fitted exactly through the first, middle, and last points, then
//! every point is checked against it. Winding is read from the tangent at the
//! middle point: in y-down screen coordinates a negative cross product of the
//! radius and tangent vectors means the pen moved clockwise.

use super::path;
use crate::draw::RecognizedShape;
use crate::draw::outline::{arc_sweep, point_on_circle};
use crate::util::{Point, Rect};
use log::trace;

const MIN_PATH: f64 = 20.0;
/// Direct distance over path length must fall strictly inside this range.
/// Below is a closed shape, above is a line.
const OPENNESS: (f64, f64) = (0.15, 0.70);
const MIN_RADIUS: f64 = 10.0;
const MAX_RADIUS: f64 = 2000.0;
/// Mean distance from the fitted circle, relative to the radius.
const MAX_MEAN_DEVIATION: f64 = 0.12;
/// Samples along the fitted arc used to compute its bounding box.
const BOUNDS_SEGMENTS: u32 = 40;

/// Center and radius of the circle through three points, `None` when they are collinear.
pub(crate) fn circumcircle(a: Point, b: Point, c: Point) -> Option<(Point, f64)> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() <= 0.001 {
        return None;
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let center = Point::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );
    Some((center, center.distance(a)))
}

pub(crate) fn detect(points: &[Point]) -> Option<RecognizedShape> {
    let start = *points.first()?;
    let end = *points.last()?;

    let length = path::path_length(points);
    if length <= MIN_PATH {
        trace!("arc: path length {length:.1} too short");
        return None;
    }

    let openness = path::direct_distance(points) / length;
    if openness <= OPENNESS.0 || openness >= OPENNESS.1 {
        trace!("arc: openness {openness:.3} outside range");
        return None;
    }

    let mid_index = points.len() / 2;
    let mid = points[mid_index];
    let Some((center, radius)) = circumcircle(start, mid, end) else {
        trace!("arc: reference points are collinear");
        return None;
    };
    if radius <= MIN_RADIUS || radius >= MAX_RADIUS {
        trace!("arc: radius {radius:.1} outside range");
        return None;
    }

    let mean_deviation = points
        .iter()
        .map(|p| (p.distance(center) - radius).abs())
        .sum::<f64>()
        / points.len() as f64;
    if mean_deviation / radius >= MAX_MEAN_DEVIATION {
        trace!("arc: fit deviation {:.3} too high", mean_deviation / radius);
        return None;
    }

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let end_angle = (end.y - center.y).atan2(end.x - center.x);

    let before = points[mid_index.saturating_sub(1)];
    let after = points[(mid_index + 1).min(points.len() - 1)];
    let (rx, ry) = (mid.x - center.x, mid.y - center.y);
    let (tx, ty) = (after.x - before.x, after.y - before.y);
    let clockwise = rx * ty - ry * tx < 0.0;

    let sweep = arc_sweep(start_angle, end_angle, clockwise);
    let samples: Vec<Point> = (0..=BOUNDS_SEGMENTS)
        .map(|i| {
            let t = f64::from(i) / f64::from(BOUNDS_SEGMENTS);
            let angle = if clockwise {
                start_angle - t * sweep
            } else {
                start_angle + t * sweep
            };
            point_on_circle(center, radius, angle)
        })
        .collect();
    let bounds = Rect::from_points(&samples)?;

    Some(RecognizedShape::Arc {
        center,
        radius,
        start_angle,
        end_angle,
        clockwise,
        bounds,
    })
}
