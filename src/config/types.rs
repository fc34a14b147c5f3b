//! Configuration type definitions.

use crate::draw::RecognizedKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Freehand shape recognition settings.
///
/// Controls which shapes the recognizer may return and how eagerly it snaps
/// near-regular shapes to their perfect form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecognizerConfig {
    /// Master switch; when false every stroke stays freehand
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Shapes the recognizer should never report, e.g. `["triangle"]`
    #[serde(default)]
    pub disabled_shapes: Vec<RecognizedKind>,

    /// Lines within this many degrees of horizontal or vertical are snapped
    /// onto the axis (valid range: 0.0 - 45.0)
    #[serde(default = "default_axis_snap_degrees")]
    pub axis_snap_degrees: f64,

    /// Rectangles whose short/long side ratio exceeds this become squares
    /// (valid range: 0.0 - 1.0)
    #[serde(default = "default_square_snap_aspect")]
    pub square_snap_aspect: f64,

    /// Ellipses whose short/long axis ratio exceeds this become circles
    /// (valid range: 0.0 - 1.0)
    #[serde(default = "default_circle_snap_aspect")]
    pub circle_snap_aspect: f64,

    /// How far width/height may stray from 1.0 before a circle or rectangle
    /// is offered for perfecting (valid range: 0.0 - 0.5)
    #[serde(default = "default_perfect_aspect_tolerance")]
    pub perfect_aspect_tolerance: f64,

    /// Perfected lines are rotated to the nearest multiple of this angle
    /// (valid range: 1.0 - 90.0)
    #[serde(default = "default_line_angle_step_degrees")]
    pub line_angle_step_degrees: f64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            disabled_shapes: Vec::new(),
            axis_snap_degrees: default_axis_snap_degrees(),
            square_snap_aspect: default_square_snap_aspect(),
            circle_snap_aspect: default_circle_snap_aspect(),
            perfect_aspect_tolerance: default_perfect_aspect_tolerance(),
            line_angle_step_degrees: default_line_angle_step_degrees(),
        }
    }
}

impl RecognizerConfig {
    /// Whether `kind` may be reported.
    pub fn allows(&self, kind: RecognizedKind) -> bool {
        self.enabled && !self.disabled_shapes.contains(&kind)
    }
}

/// Sampling density of generated vector outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutlineConfig {
    /// Segments around a full ellipse (valid range: 8 - 720)
    #[serde(default = "default_ellipse_segments")]
    pub ellipse_segments: u32,

    /// Samples per rectangle edge (valid range: 1 - 200)
    #[serde(default = "default_rectangle_edge_points")]
    pub rectangle_edge_points: u32,

    /// Samples per star or triangle edge (valid range: 1 - 200)
    #[serde(default = "default_polygon_edge_points")]
    pub polygon_edge_points: u32,

    /// Segments along a recognized arc (valid range: 4 - 720)
    #[serde(default = "default_arc_segments")]
    pub arc_segments: u32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            ellipse_segments: default_ellipse_segments(),
            rectangle_edge_points: default_rectangle_edge_points(),
            polygon_edge_points: default_polygon_edge_points(),
            arc_segments: default_arc_segments(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_enabled() -> bool {
    true
}

fn default_axis_snap_degrees() -> f64 {
    8.0
}

fn default_square_snap_aspect() -> f64 {
    0.75
}

fn default_circle_snap_aspect() -> f64 {
    0.7
}

fn default_perfect_aspect_tolerance() -> f64 {
    0.05
}

fn default_line_angle_step_degrees() -> f64 {
    15.0
}

fn default_ellipse_segments() -> u32 {
    40
}

fn default_rectangle_edge_points() -> u32 {
    20
}

fn default_polygon_edge_points() -> u32 {
    15
}

fn default_arc_segments() -> u32 {
    30
}
