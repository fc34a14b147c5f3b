//! Smooth polyline ("vector stroke") generation for idealized shapes.
//!
//! The ink layer of the host application wants timed control points rather than
//! grid cells. These functions produce them both for shape-tool drags and for
//! recognized freehand strokes.

use super::shape::{RecognizedShape, ShapeKind};
use crate::config::OutlineConfig;
use crate::util::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Seconds between the two points of a straight line stroke.
const LINE_DURATION: f64 = 0.1;
/// Seconds between consecutive samples on ellipses and arcs.
const CURVE_INTERVAL: f64 = 0.01;
/// Seconds between consecutive samples on straight polygon edges.
const EDGE_INTERVAL: f64 = 0.005;
const STAR_INNER_RATIO: f64 = 0.4;

/// One control point of a generated stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub location: Point,
    /// Seconds since the first point of the stroke
    pub time_offset: f64,
}

/// Accumulates stroke points with a running clock.
#[derive(Default)]
struct StrokeBuilder {
    points: Vec<StrokePoint>,
    clock: f64,
}

impl StrokeBuilder {
    fn push(&mut self, location: Point, advance: f64) {
        self.points.push(StrokePoint {
            location,
            time_offset: self.clock,
        });
        self.clock += advance;
    }

    /// Straight edge from `a` to `b` split into `steps` pieces. The first sample is
    /// skipped when `skip_first` is set so shared corners are not emitted twice.
    fn edge(&mut self, a: Point, b: Point, steps: u32, skip_first: bool) {
        let first = u32::from(skip_first);
        for j in first..=steps {
            let t = f64::from(j) / f64::from(steps);
            self.push(a.lerp(b, t), EDGE_INTERVAL);
        }
    }

    fn finish(self) -> Vec<StrokePoint> {
        self.points
    }
}

/// Control points for a shape-tool drag from `start` to `end`.
///
/// Squares and circles are constrained to equal extents using the larger of the
/// two drag distances, keeping the drag direction. Stars are regular (not
/// stretched) with an outer radius of half the larger drag distance.
pub fn tool_outline(
    kind: ShapeKind,
    start: Point,
    end: Point,
    config: &OutlineConfig,
) -> Vec<StrokePoint> {
    let end = match kind {
        ShapeKind::Square | ShapeKind::Circle => constrain_equal(start, end),
        _ => end,
    };
    let bounds = Rect::from_min_max(
        start.x.min(end.x),
        start.y.min(end.y),
        start.x.max(end.x),
        start.y.max(end.y),
    );

    match kind {
        ShapeKind::Line => line_stroke(start, end),
        ShapeKind::Rectangle | ShapeKind::Square => box_stroke(bounds, config),
        ShapeKind::Oval | ShapeKind::Circle => ellipse_stroke(bounds, config),
        ShapeKind::Star => star_stroke(start, end, config),
    }
}

/// Control points tracing a recognized shape.
pub fn recognized_outline(shape: &RecognizedShape, config: &OutlineConfig) -> Vec<StrokePoint> {
    match *shape {
        RecognizedShape::Line { start, end, .. } => line_stroke(start, end),
        RecognizedShape::Circle { bounds } => ellipse_stroke(bounds, config),
        RecognizedShape::Rectangle { bounds } => box_stroke(bounds, config),
        RecognizedShape::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
            ..
        } => {
            let sweep = arc_sweep(start_angle, end_angle, clockwise);
            let segments = config.arc_segments.max(1);
            let mut builder = StrokeBuilder::default();
            for i in 0..=segments {
                let t = f64::from(i) / f64::from(segments);
                let angle = if clockwise {
                    start_angle - t * sweep
                } else {
                    start_angle + t * sweep
                };
                builder.push(point_on_circle(center, radius, angle), CURVE_INTERVAL);
            }
            builder.finish()
        }
        RecognizedShape::Triangle { vertices, .. } => {
            let steps = config.polygon_edge_points.max(1);
            let mut builder = StrokeBuilder::default();
            for edge in 0..3 {
                let a = vertices[edge];
                let b = vertices[(edge + 1) % 3];
                builder.edge(a, b, steps, edge > 0);
            }
            builder.finish()
        }
    }
}

/// Angle covered when travelling from `start` to `end` in the given direction, in `[0, 2π)`.
pub fn arc_sweep(start: f64, end: f64, clockwise: bool) -> f64 {
    let sweep = if clockwise { start - end } else { end - start };
    if sweep < 0.0 { sweep + TAU } else { sweep }
}

pub(crate) fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn constrain_equal(start: Point, end: Point) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let size = dx.abs().max(dy.abs());
    Point::new(
        start.x + if dx >= 0.0 { size } else { -size },
        start.y + if dy >= 0.0 { size } else { -size },
    )
}

fn line_stroke(start: Point, end: Point) -> Vec<StrokePoint> {
    let mut builder = StrokeBuilder::default();
    builder.push(start, LINE_DURATION);
    builder.push(end, 0.0);
    builder.finish()
}

fn box_stroke(rect: Rect, config: &OutlineConfig) -> Vec<StrokePoint> {
    let steps = config.rectangle_edge_points.max(1);
    let corners = [
        Point::new(rect.min_x(), rect.min_y()),
        Point::new(rect.max_x(), rect.min_y()),
        Point::new(rect.max_x(), rect.max_y()),
        Point::new(rect.min_x(), rect.max_y()),
    ];

    let mut builder = StrokeBuilder::default();
    for edge in 0..4 {
        builder.edge(corners[edge], corners[(edge + 1) % 4], steps, edge > 0);
    }
    builder.finish()
}

fn ellipse_stroke(rect: Rect, config: &OutlineConfig) -> Vec<StrokePoint> {
    let segments = config.ellipse_segments.max(1);
    let (rx, ry) = (rect.width / 2.0, rect.height / 2.0);

    let mut builder = StrokeBuilder::default();
    for i in 0..=segments {
        let angle = f64::from(i) / f64::from(segments) * TAU;
        builder.push(
            Point::new(rect.mid_x() + rx * angle.cos(), rect.mid_y() + ry * angle.sin()),
            CURVE_INTERVAL,
        );
    }
    builder.finish()
}

fn star_stroke(start: Point, end: Point, config: &OutlineConfig) -> Vec<StrokePoint> {
    let center = start.lerp(end, 0.5);
    let outer = (end.x - start.x).abs().max((end.y - start.y).abs()) / 2.0;
    let vertices: Vec<Point> = (0..10)
        .map(|i| {
            let angle = f64::from(i) * PI / 5.0 - PI / 2.0;
            let radius = if i % 2 == 0 {
                outer
            } else {
                outer * STAR_INNER_RATIO
            };
            point_on_circle(center, radius, angle)
        })
        .collect();

    let steps = config.polygon_edge_points.max(1);
    let mut builder = StrokeBuilder::default();
    for (i, &a) in vertices.iter().enumerate() {
        builder.edge(a, vertices[(i + 1) % vertices.len()], steps, false);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OutlineConfig {
        OutlineConfig::default()
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn line_outline_has_two_timed_points() {
        let points = tool_outline(
            ShapeKind::Line,
            Point::new(0.0, 0.0),
            Point::new(30.0, 40.0),
            &config(),
        );
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time_offset, 0.0);
        assert_eq!(points[1].time_offset, 0.1);
    }

    #[test]
    fn rectangle_outline_is_closed_with_shared_corners_once() {
        let cfg = config();
        let points = tool_outline(
            ShapeKind::Rectangle,
            Point::new(10.0, 10.0),
            Point::new(50.0, 30.0),
            &cfg,
        );
        let per_edge = cfg.rectangle_edge_points as usize;
        assert_eq!(points.len(), 4 * per_edge + 1);
        assert!(close(points[0].location, points[points.len() - 1].location));
        assert!(close(points[per_edge].location, Point::new(50.0, 10.0)));
        assert!(
            points
                .windows(2)
                .all(|w| w[1].time_offset > w[0].time_offset)
        );
    }

    #[test]
    fn square_tool_uses_larger_drag_extent() {
        let points = tool_outline(
            ShapeKind::Square,
            Point::new(100.0, 100.0),
            Point::new(60.0, 130.0),
            &config(),
        );
        let bounds = Rect::from_points(&points.iter().map(|p| p.location).collect::<Vec<_>>())
            .unwrap();
        assert!((bounds.width - 40.0).abs() < 1e-9);
        assert!((bounds.height - 40.0).abs() < 1e-9);
        assert!((bounds.min_x() - 60.0).abs() < 1e-9);
        assert!((bounds.min_y() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn circle_outline_stays_on_ellipse() {
        let cfg = config();
        let shape = RecognizedShape::Circle {
            bounds: Rect::new(0.0, 0.0, 100.0, 50.0),
        };
        let points = recognized_outline(&shape, &cfg);
        assert_eq!(points.len(), cfg.ellipse_segments as usize + 1);
        for p in &points {
            let nx = (p.location.x - 50.0) / 50.0;
            let ny = (p.location.y - 25.0) / 25.0;
            assert!((nx * nx + ny * ny - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn arc_outline_follows_recorded_direction() {
        let cfg = config();
        let shape = RecognizedShape::Arc {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
            clockwise: true,
            bounds: Rect::default(),
        };
        let points = recognized_outline(&shape, &cfg);
        assert_eq!(points.len(), cfg.arc_segments as usize + 1);
        // Clockwise from 0 to π/2 goes the long way round, through negative y.
        let mid = points[points.len() / 2].location;
        assert!(mid.x < 0.0);
        assert!(close(points.last().unwrap().location, Point::new(0.0, 10.0)));
    }

    #[test]
    fn arc_sweep_wraps_into_positive_range() {
        assert!((arc_sweep(0.0, PI / 2.0, false) - PI / 2.0).abs() < 1e-12);
        assert!((arc_sweep(0.0, PI / 2.0, true) - 1.5 * PI).abs() < 1e-12);
        assert!((arc_sweep(PI, 0.0, true) - PI).abs() < 1e-12);
    }

    #[test]
    fn triangle_outline_closes_back_on_first_vertex() {
        let cfg = config();
        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ];
        let shape = RecognizedShape::Triangle {
            vertices,
            bounds: Rect::new(0.0, 0.0, 10.0, 8.0),
        };
        let points = recognized_outline(&shape, &cfg);
        let steps = cfg.polygon_edge_points as usize;
        assert_eq!(points.len(), 3 * steps + 1);
        assert!(close(points[steps].location, vertices[1]));
        assert!(close(points.last().unwrap().location, vertices[0]));
    }

    #[test]
    fn star_outline_is_regular_and_closed() {
        let cfg = config();
        let points = tool_outline(
            ShapeKind::Star,
            Point::new(0.0, 0.0),
            Point::new(100.0, 40.0),
            &cfg,
        );
        assert_eq!(points.len(), 10 * (cfg.polygon_edge_points as usize + 1));
        // Top tip sits half the larger extent above the drag midpoint.
        assert!(close(points[0].location, Point::new(50.0, -30.0)));
        assert!(close(points.last().unwrap().location, points[0].location));
    }
}
