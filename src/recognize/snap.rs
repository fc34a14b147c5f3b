//! Snapping recognized shapes to their regular forms.
//!
//! Axis snapping happens during recognition. Perfecting is a second, explicit
//! step (a long press in the host app) that squares boxes and ellipses and
//! rotates lines onto a fixed angular grid.

use crate::config::RecognizerConfig;
use crate::draw::RecognizedShape;
use crate::util::Point;

/// Flattens a nearly horizontal or vertical segment onto the axis.
///
/// The off-axis coordinate of both ends becomes their average. Segments more than
/// `degrees` away from either axis are returned unchanged.
pub fn snap_line_to_axis(start: Point, end: Point, degrees: f64) -> (Point, Point) {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let angle = dy.abs().atan2(dx.abs());
    let threshold = degrees.to_radians();

    if angle < threshold {
        let y = (start.y + end.y) / 2.0;
        (Point::new(start.x, y), Point::new(end.x, y))
    } else if angle > std::f64::consts::FRAC_PI_2 - threshold {
        let x = (start.x + end.x) / 2.0;
        (Point::new(x, start.y), Point::new(x, end.y))
    } else {
        (start, end)
    }
}

/// Whether [`perfect`] would change `shape`.
///
/// Circles and rectangles qualify while their width/height ratio is outside
/// `1 ± perfect_aspect_tolerance`. Lines always qualify.
pub fn can_be_perfected(shape: &RecognizedShape, config: &RecognizerConfig) -> bool {
    match shape {
        RecognizedShape::Circle { bounds } | RecognizedShape::Rectangle { bounds } => {
            if bounds.height <= 0.0 {
                return true;
            }
            let ratio = bounds.width / bounds.height;
            let tol = config.perfect_aspect_tolerance;
            ratio < 1.0 - tol || ratio > 1.0 + tol
        }
        RecognizedShape::Line { .. } => true,
        RecognizedShape::Arc { .. } | RecognizedShape::Triangle { .. } => false,
    }
}

/// Regular form of `shape`.
///
/// Circles and rectangles become squares around the same center. A line keeps its
/// start, length, and bounds while its end rotates to the nearest multiple of
/// `line_angle_step_degrees`. Arcs and triangles are returned as-is.
pub fn perfect(shape: &RecognizedShape, config: &RecognizerConfig) -> RecognizedShape {
    match *shape {
        RecognizedShape::Circle { bounds } => RecognizedShape::Circle {
            bounds: bounds.squared(),
        },
        RecognizedShape::Rectangle { bounds } => RecognizedShape::Rectangle {
            bounds: bounds.squared(),
        },
        RecognizedShape::Line { start, end, bounds } => {
            let step = config.line_angle_step_degrees.to_radians();
            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let angle = (dy.atan2(dx) / step).round() * step;
            let length = dx.hypot(dy);
            RecognizedShape::Line {
                start,
                end: Point::new(
                    start.x + length * angle.cos(),
                    start.y + length * angle.sin(),
                ),
                bounds,
            }
        }
        RecognizedShape::Arc { .. } | RecognizedShape::Triangle { .. } => shape.clone(),
    }
}
