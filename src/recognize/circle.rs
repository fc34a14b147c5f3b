//! Closed circle and ellipse detection.
//!
//! The candidate ellipse is the one inscribed in the stroke's bounding box. Each
//! point's distance from the center is compared with the ellipse radius in the
//! same direction; a good stroke keeps that ratio near 1 with little spread.

use super::path;
use crate::config::RecognizerConfig;
use crate::draw::RecognizedShape;
use crate::util::{Point, Rect};
use log::trace;
use std::f64::consts::PI;

const MIN_DIAGONAL: f64 = 10.0;
const MAX_GAP: f64 = 0.15;
const RATIO_MEAN: (f64, f64) = (0.75, 1.30);
const MAX_RATIO_SPREAD: f64 = 0.20;
/// Path length over the ellipse perimeter must lie in this range.
const PERIMETER_RATIO: (f64, f64) = (0.7, 1.5);

/// Ramanujan's second approximation of an ellipse perimeter.
pub(crate) fn ellipse_perimeter(rx: f64, ry: f64) -> f64 {
    let h = (rx - ry).powi(2) / (rx + ry).powi(2);
    PI * (rx + ry) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

pub(crate) fn detect(points: &[Point], config: &RecognizerConfig) -> Option<RecognizedShape> {
    let bounds = Rect::from_points(points)?;
    if bounds.diagonal() <= MIN_DIAGONAL {
        trace!("circle: too small");
        return None;
    }

    let gap = path::closedness(points, &bounds);
    if gap >= MAX_GAP {
        trace!("circle: not closed ({gap:.3})");
        return None;
    }

    let center = bounds.center();
    let rx = bounds.width / 2.0;
    let ry = bounds.height / 2.0;
    if rx <= 1.0 || ry <= 1.0 {
        trace!("circle: degenerate radii {rx:.1}x{ry:.1}");
        return None;
    }

    let ratios: Vec<f64> = points
        .iter()
        .filter_map(|p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            let theta = dy.atan2(dx);
            let expected = rx * ry / (ry * theta.cos()).hypot(rx * theta.sin());
            (expected > 0.0).then(|| dx.hypot(dy) / expected)
        })
        .collect();
    if ratios.len() < 4 {
        return None;
    }

    let n = ratios.len() as f64;
    let mean = ratios.iter().sum::<f64>() / n;
    let spread = (ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n).sqrt();
    if !(RATIO_MEAN.0..=RATIO_MEAN.1).contains(&mean) || spread >= MAX_RATIO_SPREAD {
        trace!("circle: radius ratio mean {mean:.3} spread {spread:.3}");
        return None;
    }

    let perimeter = ellipse_perimeter(rx, ry);
    let coverage = path::path_length(points) / perimeter;
    if !(PERIMETER_RATIO.0..=PERIMETER_RATIO.1).contains(&coverage) {
        trace!("circle: path covers {coverage:.2} of the perimeter");
        return None;
    }

    let bounds = if bounds.aspect() > config.circle_snap_aspect {
        bounds.squared()
    } else {
        bounds
    };
    Some(RecognizedShape::Circle { bounds })
}
