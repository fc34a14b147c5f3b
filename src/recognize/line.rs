//! Straight line detection.

use super::{path, snap};
use crate::config::RecognizerConfig;
use crate::draw::RecognizedShape;
use crate::util::{self, Point, Rect};
use log::trace;

/// Shortest start-to-end distance accepted as a deliberate line.
const MIN_LENGTH: f64 = 20.0;
/// Direct distance over path length must exceed this.
const MIN_STRAIGHTNESS: f64 = 0.70;
/// Largest perpendicular wobble, relative to the line length.
const MAX_DEVIATION: f64 = 0.05;

pub(crate) fn detect(points: &[Point], config: &RecognizerConfig) -> Option<RecognizedShape> {
    let start = *points.first()?;
    let end = *points.last()?;
    let direct = start.distance(end);
    if direct < MIN_LENGTH {
        trace!("line: direct distance {direct:.1} too short");
        return None;
    }

    let length = path::path_length(points);
    if length <= 0.0 || direct / length <= MIN_STRAIGHTNESS {
        trace!("line: straightness {:.3} too low", direct / length);
        return None;
    }

    let deviation = points
        .iter()
        .map(|&p| util::perpendicular_distance(p, start, end, direct))
        .fold(0.0, f64::max);
    if deviation / direct >= MAX_DEVIATION {
        trace!("line: deviation ratio {:.3} too high", deviation / direct);
        return None;
    }

    let (start, end) = snap::snap_line_to_axis(start, end, config.axis_snap_degrees);
    let min_x = start.x.min(end.x);
    let min_y = start.y.min(end.y);
    let bounds = Rect::new(
        min_x,
        min_y,
        (start.x.max(end.x) - min_x).max(1.0),
        (start.y.max(end.y) - min_y).max(1.0),
    );

    Some(RecognizedShape::Line { start, end, bounds })
}
