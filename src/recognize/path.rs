//! Path measurements shared by the detectors.
//!
//! Everything here works on plain point slices. Resampling decouples corner
//! detection from how fast the stroke was drawn; the two corner finders differ
//! in how wide a neighbourhood they look at and how they merge clusters.

use crate::util::{self, Point, Rect};

/// Sum of distances between consecutive points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Straight-line distance from the first to the last point.
pub fn direct_distance(points: &[Point]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => first.distance(*last),
        _ => 0.0,
    }
}

/// Start-to-end gap relative to the size of the stroke's bounding box.
///
/// Small values mean the pen was lifted near where it went down.
pub fn closedness(points: &[Point], bounds: &Rect) -> f64 {
    direct_distance(points) / bounds.diagonal()
}

/// Re-derives `count` points spaced evenly along the path's arc length.
///
/// The first point is kept as-is. When floating-point drift leaves the walk one
/// sample short, the last input point pads the result. A path with no length
/// yields `count` copies of its first point.
pub fn resample(points: &[Point], count: usize) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let last = points[points.len() - 1];
    let total = path_length(points);
    if count < 2 || total <= 0.0 {
        return vec![first; count.max(1)];
    }

    let interval = total / (count - 1) as f64;
    let mut out = Vec::with_capacity(count);
    out.push(first);

    let mut carried = 0.0;
    let mut prev = first;
    let mut next = 1;
    while next < points.len() && out.len() < count {
        let cur = points[next];
        let seg = prev.distance(cur);
        if seg > 0.0 && carried + seg >= interval {
            let sample = prev.lerp(cur, (interval - carried) / seg);
            out.push(sample);
            prev = sample;
            carried = 0.0;
        } else {
            carried += seg;
            prev = cur;
            next += 1;
        }
    }

    out.resize(count, last);
    out
}

fn direction(from: Point, to: Point) -> (f64, f64) {
    (to.x - from.x, to.y - from.y)
}

/// Turn angle at `i` measured with chords reaching `window` samples to each side.
/// Indices are clamped to the slice.
fn window_turn(points: &[Point], i: usize, window: usize) -> Option<f64> {
    let before = points[i.saturating_sub(window)];
    let after = points[(i + window).min(points.len() - 1)];
    util::turn_angle(direction(before, points[i]), direction(points[i], after))
}

/// Corner indices found by comparing chords `window` samples before and after each point.
///
/// Candidates closer than `merge` indices to the previous corner replace it only
/// when they turn more sharply.
pub fn window_corners(points: &[Point], window: usize, threshold: f64, merge: usize) -> Vec<usize> {
    let mut corners: Vec<usize> = Vec::new();
    if points.len() <= 2 * window {
        return corners;
    }

    for i in window..(points.len() - window) {
        let Some(angle) = window_turn(points, i, window) else {
            continue;
        };
        if angle <= threshold {
            continue;
        }

        match corners.last().copied() {
            Some(last) if i - last < merge => {
                let sharper = window_turn(points, last, window).is_some_and(|prev| angle > prev);
                if sharper {
                    let end = corners.len() - 1;
                    corners[end] = i;
                }
            }
            _ => corners.push(i),
        }
    }
    corners
}

/// Corner indices found from the turn between consecutive segments.
///
/// A corner is reported at the middle point of the triple; any candidate within
/// `merge` indices of the previous corner is dropped.
pub fn consecutive_corners(points: &[Point], threshold: f64, merge: usize) -> Vec<usize> {
    let mut corners: Vec<usize> = Vec::new();
    for i in 2..points.len() {
        let v1 = direction(points[i - 2], points[i - 1]);
        let v2 = direction(points[i - 1], points[i]);
        let Some(angle) = util::turn_angle(v1, v2) else {
            continue;
        };
        if angle <= threshold {
            continue;
        }
        if corners.last().is_some_and(|&last| i - last < merge) {
            continue;
        }
        corners.push(i - 1);
    }
    corners
}

/// Whether every sub-path between consecutive breakpoints stays close to its chord.
///
/// Breakpoints are the start, each corner, and the end. Deviation is measured
/// relative to the chord length; chords shorter than 0.01 are not checked.
pub fn segments_straight(points: &[Point], corners: &[usize], tolerance: f64) -> bool {
    let mut breaks = Vec::with_capacity(corners.len() + 2);
    breaks.push(0);
    breaks.extend_from_slice(corners);
    breaks.push(points.len() - 1);

    breaks.windows(2).all(|pair| {
        let (a, b) = (points[pair[0]], points[pair[1]]);
        let chord = a.distance(b);
        if chord <= 0.01 {
            return true;
        }
        let worst = points[pair[0]..=pair[1]]
            .iter()
            .map(|&p| util::perpendicular_distance(p, a, b, chord))
            .fold(0.0, f64::max);
        worst / chord <= tolerance
    })
}
