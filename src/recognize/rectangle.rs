//! Closed axis-aligned rectangle detection.

use super::path;
use crate::config::RecognizerConfig;
use crate::draw::RecognizedShape;
use crate::util::{Point, Rect};
use log::trace;

const MIN_DIAGONAL: f64 = 10.0;
/// Start-to-end gap relative to the bounds diagonal. Hand-drawn boxes often
/// leave a visible gap, so this is looser than the triangle and circle limits.
const MAX_GAP: f64 = 0.20;
const SAMPLES: usize = 64;
const CORNER_WINDOW: usize = 4;
const CORNER_DEGREES: f64 = 30.0;
const CORNER_MERGE: usize = 8;
const EDGE_TOLERANCE: f64 = 0.12;

pub(crate) fn detect(points: &[Point], config: &RecognizerConfig) -> Option<RecognizedShape> {
    let bounds = Rect::from_points(points)?;
    if bounds.diagonal() <= MIN_DIAGONAL {
        trace!("rectangle: too small");
        return None;
    }

    let gap = path::closedness(points, &bounds);
    if gap >= MAX_GAP {
        trace!("rectangle: not closed ({gap:.3})");
        return None;
    }

    let resampled = path::resample(points, SAMPLES);
    let corners = path::window_corners(
        &resampled,
        CORNER_WINDOW,
        CORNER_DEGREES.to_radians(),
        CORNER_MERGE,
    );
    if !(3..=5).contains(&corners.len()) {
        trace!("rectangle: {} corners", corners.len());
        return None;
    }

    if !path::segments_straight(&resampled, &corners, EDGE_TOLERANCE) {
        trace!("rectangle: curved edge");
        return None;
    }

    let bounds = if bounds.aspect() > config.square_snap_aspect {
        bounds.squared()
    } else {
        bounds
    };
    Some(RecognizedShape::Rectangle { bounds })
}
