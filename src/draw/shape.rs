//! Shape definitions shared by the rasterizer, recognizer, and outline generator.

use crate::util::{Point, Rect};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Idealized shape a user can place with the shape tool.
///
/// Every kind except [`ShapeKind::Line`] accepts a `filled` modifier when rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Straight segment between the two anchors
    Line,
    /// Axis-aligned box spanned by the two anchors
    Rectangle,
    /// Rectangle constrained to equal sides
    Square,
    /// Oval constrained to equal axes
    Circle,
    /// Ellipse inscribed in the anchor box
    Oval,
    /// Five-pointed star inscribed in the anchor box
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Oval,
        ShapeKind::Star,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Oval => "oval",
            ShapeKind::Star => "star",
        }
    }

    /// Whether the `filled` modifier changes the rasterized output.
    pub fn supports_fill(self) -> bool {
        !matches!(self, ShapeKind::Line)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a shape name does not match any [`ShapeKind`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown shape '{0}' (expected one of: line, rectangle, square, circle, oval, star)")]
pub struct ParseShapeKindError(pub String);

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "rect" => Ok(ShapeKind::Rectangle),
            "ellipse" => Ok(ShapeKind::Oval),
            _ => ShapeKind::ALL
                .into_iter()
                .find(|kind| kind.name() == wanted)
                .ok_or_else(|| ParseShapeKindError(s.to_string())),
        }
    }
}

/// Vocabulary of the freehand recognizer.
///
/// Square, oval, and star are absent: aspect-ratio variants fold into
/// [`RecognizedKind::Circle`] and [`RecognizedKind::Rectangle`] with snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RecognizedKind {
    Line,
    Circle,
    Rectangle,
    Arc,
    Triangle,
}

impl fmt::Display for RecognizedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecognizedKind::Line => "line",
            RecognizedKind::Circle => "circle",
            RecognizedKind::Rectangle => "rectangle",
            RecognizedKind::Arc => "arc",
            RecognizedKind::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// A freehand stroke classified as an idealized shape.
///
/// Each variant carries only the geometry meaningful for its kind, plus the
/// bounding rectangle used by callers for previews and resize handles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RecognizedShape {
    /// Straight segment, possibly snapped to an axis
    Line { start: Point, end: Point, bounds: Rect },
    /// Ellipse inscribed in `bounds`; a circle when `bounds` is square
    Circle { bounds: Rect },
    /// Axis-aligned rectangle; a square when `bounds` is square
    Rectangle { bounds: Rect },
    /// Open circular arc
    Arc {
        center: Point,
        radius: f64,
        /// Angle of the first stroke point, in radians
        start_angle: f64,
        /// Angle of the last stroke point, in radians
        end_angle: f64,
        /// True when the stroke sweeps towards decreasing angles
        clockwise: bool,
        bounds: Rect,
    },
    /// Three vertices in drawing order
    Triangle { vertices: [Point; 3], bounds: Rect },
}

impl RecognizedShape {
    pub fn kind(&self) -> RecognizedKind {
        match self {
            RecognizedShape::Line { .. } => RecognizedKind::Line,
            RecognizedShape::Circle { .. } => RecognizedKind::Circle,
            RecognizedShape::Rectangle { .. } => RecognizedKind::Rectangle,
            RecognizedShape::Arc { .. } => RecognizedKind::Arc,
            RecognizedShape::Triangle { .. } => RecognizedKind::Triangle,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            RecognizedShape::Line { bounds, .. }
            | RecognizedShape::Circle { bounds }
            | RecognizedShape::Rectangle { bounds }
            | RecognizedShape::Arc { bounds, .. }
            | RecognizedShape::Triangle { bounds, .. } => *bounds,
        }
    }

    /// Re-fits the shape into `rect`, as when the user drags a resize handle.
    ///
    /// Points are scaled per axis relative to the old bounds' origin. An axis whose
    /// old extent is at most one unit is not scaled (a horizontal line keeps its
    /// height). Arc radii scale by the larger of the two factors.
    pub fn fit_to(&self, rect: Rect) -> RecognizedShape {
        let old = self.bounds();
        let scale_x = if old.width > 1.0 {
            rect.width / old.width
        } else {
            1.0
        };
        let scale_y = if old.height > 1.0 {
            rect.height / old.height
        } else {
            1.0
        };
        let map = |p: Point| {
            Point::new(
                rect.x + (p.x - old.x) * scale_x,
                rect.y + (p.y - old.y) * scale_y,
            )
        };

        match *self {
            RecognizedShape::Line { start, end, .. } => RecognizedShape::Line {
                start: map(start),
                end: map(end),
                bounds: rect,
            },
            RecognizedShape::Circle { .. } => RecognizedShape::Circle { bounds: rect },
            RecognizedShape::Rectangle { .. } => RecognizedShape::Rectangle { bounds: rect },
            RecognizedShape::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
                ..
            } => RecognizedShape::Arc {
                center: map(center),
                radius: radius * scale_x.max(scale_y),
                start_angle,
                end_angle,
                clockwise,
                bounds: rect,
            },
            RecognizedShape::Triangle { vertices, .. } => RecognizedShape::Triangle {
                vertices: vertices.map(map),
                bounds: rect,
            },
        }
    }
}
