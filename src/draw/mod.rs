//! Shape definitions and the two output paths for idealized shapes.
//!
//! This module defines the drawing-side types:
//! - [`ShapeKind`] and [`RecognizedShape`]: what the shape tool and the recognizer produce
//! - [`raster`]: exact grid cells for pixel canvases
//! - [`outline`]: timed polylines for vector ink
//! - [`PixelGrid`]: a bounded grid to paint cells into and flood fill

pub mod grid;
pub mod outline;
pub mod raster;
pub mod shape;

// Re-export commonly used types at module level
pub use grid::PixelGrid;
pub use outline::{StrokePoint, recognized_outline, tool_outline};
pub use raster::{Cell, rasterize};
pub use shape::{ParseShapeKindError, RecognizedKind, RecognizedShape, ShapeKind};
