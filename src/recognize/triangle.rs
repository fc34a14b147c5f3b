//! Closed triangle detection.

use super::path;
use crate::draw::RecognizedShape;
use crate::util::{Point, Rect};
use log::trace;

const MIN_DIAGONAL: f64 = 10.0;
const MAX_GAP: f64 = 0.15;
const SAMPLES: usize = 64;
const CORNER_DEGREES: f64 = 35.0;
const CORNER_MERGE: usize = 6;
const EDGE_TOLERANCE: f64 = 0.10;

pub(crate) fn detect(points: &[Point]) -> Option<RecognizedShape> {
    let bounds = Rect::from_points(points)?;
    if bounds.diagonal() <= MIN_DIAGONAL {
        trace!("triangle: too small");
        return None;
    }

    let gap = path::closedness(points, &bounds);
    if gap >= MAX_GAP {
        trace!("triangle: not closed ({gap:.3})");
        return None;
    }

    let resampled = path::resample(points, SAMPLES);
    let corners = path::consecutive_corners(&resampled, CORNER_DEGREES.to_radians(), CORNER_MERGE);

    // Starting on a vertex hides one corner in the start/end join.
    let vertices = match corners.as_slice() {
        &[a, b] => [resampled[0], resampled[a], resampled[b]],
        &[a, b, c] => [resampled[a], resampled[b], resampled[c]],
        other => {
            trace!("triangle: {} corners", other.len());
            return None;
        }
    };

    if !path::segments_straight(&resampled, &corners, EDGE_TOLERANCE) {
        trace!("triangle: curved edge");
        return None;
    }

    Some(RecognizedShape::Triangle { vertices, bounds })
}
